//! Shared test utilities.

pub mod console;
pub mod runtime;
