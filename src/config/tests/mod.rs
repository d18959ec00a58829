//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `operation_mode`: Operation mode and route determination tests
//! - `environment_loading`: Loading from environment variables and CLI flags
//! - `validation`: Configuration consistency validation tests

mod helpers;
mod precedence;
