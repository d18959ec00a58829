//! Terminal user interface for the feedback form and the admin dashboard.
//!
//! The TUI follows the Model-View-Update (MVU) pattern of bubbletea-rs:
//!
//! - **Model**: application state in [`app::FeedbackApp`]
//! - **View**: rendering in each component's `view()` method
//! - **Update**: message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: main application model and entry point
//! - [`messages`]: message types for the update loop
//! - [`state`]: submission flow and dashboard state machines
//! - [`components`]: stateless rendering components
//! - [`input`]: key-to-message mapping
//! - [`timer`]: cancelable one-shot timers
//!
//! # Startup context
//!
//! `Model::init()` is a static function, so the gateway, telemetry sink,
//! initial route and terminal size are stored in module-level storage before
//! the program starts. See [`set_gateway`] and friends.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod route;
pub mod state;
pub mod storage;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod timer;

pub use app::FeedbackApp;
pub use route::Route;
pub use storage::{set_gateway, set_initial_route, set_initial_terminal_size, set_telemetry_sink};
