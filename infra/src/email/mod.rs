//! Outbound code delivery.
//!
//! The real mail/SMS provider integration lives behind the core crate's
//! `CodeDelivery` seam; this module ships the logging implementation
//! used in development and test environments.

pub mod log_delivery;

pub use log_delivery::LogCodeDelivery;
