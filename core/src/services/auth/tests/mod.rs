//! Tests for the signup/verify flow

mod mocks;
mod service_tests;
