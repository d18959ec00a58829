//! Main TUI application model implementing the MVU pattern.
//!
//! [`FeedbackApp`] owns the feedback form, the dashboard while the admin
//! route is mounted, and the timer handles for both. Every message is routed
//! through [`FeedbackApp::dispatch`], which returns the commands to run; the
//! `bubbletea_rs::Model` implementation batches them for the runtime.
//!
//! # Module Structure
//!
//! - `submission_handlers`: feedback form editing, submit and reset
//! - `dashboard_handlers`: mount/unmount, refresh and the refresh interval
//! - `lifecycle_handlers`: route switching, overlays, resize and quit
//! - `rendering`: view rendering
//! - `model_impl`: `bubbletea_rs::Model` implementation

use std::fmt;
use std::sync::Arc;

use bubbletea_rs::Cmd;
use bubbletea_rs::event::KeyMsg;

use crate::api::FeedbackGateway;
use crate::telemetry::TelemetrySink;

use super::Route;
use super::input::{InputContext, map_key_to_message};
use super::messages::AppMsg;
use super::state::{Dashboard, SubmissionFlow};
use super::timer::ScheduledTimer;

mod dashboard_handlers;
mod lifecycle_handlers;
mod model_impl;
mod rendering;
mod submission_handlers;

/// Default terminal size before the first resize event.
const DEFAULT_SIZE: (u16, u16) = (80, 24);

/// Dashboard state while the admin route is mounted.
///
/// Dropping it drops the interval handle, which cancels the pending tick.
#[derive(Debug)]
pub(crate) struct MountedDashboard {
    /// Identifies this mount in tick and refresh messages.
    mount_id: u64,
    state: Dashboard,
    interval: Option<ScheduledTimer>,
    /// Bumped on every re-arm; ticks from older arms are ignored.
    interval_generation: u64,
}

impl MountedDashboard {
    fn new(mount_id: u64) -> Self {
        Self {
            mount_id,
            state: Dashboard::new(),
            interval: None,
            interval_generation: 0,
        }
    }
}

/// Main application model for the feedback console.
pub struct FeedbackApp {
    route: Route,
    form: SubmissionFlow,
    reset_timer: Option<ScheduledTimer>,
    dashboard: Option<MountedDashboard>,
    mounts: u64,
    show_help: bool,
    width: u16,
    height: u16,
    gateway: Arc<dyn FeedbackGateway>,
    telemetry: Arc<dyn TelemetrySink>,
}

impl fmt::Debug for FeedbackApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedbackApp")
            .field("route", &self.route)
            .field("form", &self.form)
            .field("dashboard", &self.dashboard)
            .field("show_help", &self.show_help)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl FeedbackApp {
    /// Creates an application on the feedback route.
    ///
    /// The dashboard is not mounted until the admin route is entered.
    #[must_use]
    pub fn new(gateway: Arc<dyn FeedbackGateway>, telemetry: Arc<dyn TelemetrySink>) -> Self {
        let (width, height) = DEFAULT_SIZE;
        Self {
            route: Route::Feedback,
            form: SubmissionFlow::new(),
            reset_timer: None,
            dashboard: None,
            mounts: 0,
            show_help: false,
            width,
            height,
            gateway,
            telemetry,
        }
    }

    /// Sets the terminal size used for the first frame.
    #[must_use]
    pub const fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Returns the active route.
    #[must_use]
    pub const fn route(&self) -> Route {
        self.route
    }

    /// Returns the feedback form state.
    #[must_use]
    pub const fn form(&self) -> &SubmissionFlow {
        &self.form
    }

    /// Returns the dashboard state while the admin route is mounted.
    #[must_use]
    pub fn dashboard(&self) -> Option<&Dashboard> {
        self.dashboard.as_ref().map(|mounted| &mounted.state)
    }

    /// Returns true while the success message is waiting to be reset.
    #[must_use]
    pub fn is_reset_pending(&self) -> bool {
        self.reset_timer
            .as_ref()
            .is_some_and(ScheduledTimer::is_armed)
    }

    /// Returns true while the dashboard refresh interval is armed.
    #[must_use]
    pub fn is_interval_armed(&self) -> bool {
        self.dashboard
            .as_ref()
            .and_then(|mounted| mounted.interval.as_ref())
            .is_some_and(ScheduledTimer::is_armed)
    }

    /// Returns true while the help overlay is shown.
    #[must_use]
    pub const fn is_help_visible(&self) -> bool {
        self.show_help
    }

    /// Returns what currently receives key input.
    #[must_use]
    pub const fn input_context(&self) -> InputContext {
        if self.show_help {
            return InputContext::Help;
        }
        match (&self.route, &self.dashboard) {
            (Route::Admin, Some(mounted)) if mounted.state.selected().is_some() => {
                InputContext::DetailOverlay
            }
            (Route::Admin, _) => InputContext::Dashboard,
            (Route::Feedback, _) => InputContext::FeedbackForm,
        }
    }

    /// Maps a key event to a message for the current input context.
    #[must_use]
    pub fn map_key(&self, key: &KeyMsg) -> Option<AppMsg> {
        map_key_to_message(key, self.input_context())
    }

    /// Handles a message and returns every command it produced.
    ///
    /// Delegates to a handler per message category.
    pub fn dispatch(&mut self, msg: AppMsg) -> Vec<Cmd> {
        if msg.is_form() {
            return self.handle_form_msg(msg);
        }
        if msg.is_dashboard_navigation() {
            return self.handle_navigation_msg(&msg);
        }
        if msg.is_dashboard_data() {
            return self.handle_data_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Handles a message and returns a single command for the runtime.
    pub fn handle_message(&mut self, msg: AppMsg) -> Option<Cmd> {
        combine(self.dispatch(msg))
    }
}

/// Collapses commands into one, batching when there are several.
pub(crate) fn combine(mut cmds: Vec<Cmd>) -> Option<Cmd> {
    match cmds.len() {
        0 => None,
        1 => cmds.pop(),
        _ => Some(bubbletea_rs::batch(cmds)),
    }
}
