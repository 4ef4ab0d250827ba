//! Immutable phone number value object.
//!
//! A single pure domain type with no IO, no async, and minimal dependencies.
//! Instances are `Copy` and immutable, so they are safe to share freely
//! across threads.

#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod phone;
pub use phone::{PhoneNumber, PhoneNumberError};
