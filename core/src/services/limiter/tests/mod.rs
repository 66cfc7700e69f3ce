//! Tests for the verification limiter

mod mocks;
