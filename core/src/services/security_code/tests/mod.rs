//! Tests for the security-code service
