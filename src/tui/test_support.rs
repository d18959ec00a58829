//! Deterministic driver for exercising [`FeedbackApp`] in tests.
//!
//! The bubbletea runtime spawns each command and feeds its message back into
//! `update`. [`AppDriver`] does the same in-process: it polls every pending
//! command once, delivers ready messages through [`FeedbackApp::dispatch`],
//! and keeps unfinished commands (timers, mostly) until the next call. Under
//! a paused tokio clock, [`AppDriver::advance`] moves time forward and lets
//! due timers fire.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use feedback_console::api::InMemoryFeedbackGateway;
//! use feedback_console::telemetry::NoopTelemetrySink;
//! use feedback_console::tui::Route;
//! use feedback_console::tui::test_support::AppDriver;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let gateway = Arc::new(InMemoryFeedbackGateway::new());
//! let mut driver = AppDriver::start(gateway, Arc::new(NoopTelemetrySink), Route::Admin);
//!
//! let dashboard = driver.app().dashboard().expect("admin route mounts the dashboard");
//! assert!(!dashboard.is_loading());
//! # }
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::task::{Context, Poll, Waker};
use std::time::Duration;

use bubbletea_rs::Cmd;
use bubbletea_rs::event::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

use crate::api::FeedbackGateway;
use crate::telemetry::TelemetrySink;

use super::Route;
use super::app::FeedbackApp;
use super::messages::AppMsg;

/// Runs a [`FeedbackApp`] with its commands polled in-process.
pub struct AppDriver {
    app: FeedbackApp,
    pending: Vec<Cmd>,
    foreign_messages: usize,
}

impl fmt::Debug for AppDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppDriver")
            .field("app", &self.app)
            .field("pending", &self.pending.len())
            .field("foreign_messages", &self.foreign_messages)
            .finish()
    }
}

impl AppDriver {
    /// Wraps an application with no pending commands.
    #[must_use]
    pub fn new(app: FeedbackApp) -> Self {
        Self {
            app,
            pending: Vec::new(),
            foreign_messages: 0,
        }
    }

    /// Creates an application on `route` and settles its startup commands.
    #[must_use]
    pub fn start(
        gateway: Arc<dyn FeedbackGateway>,
        telemetry: Arc<dyn TelemetrySink>,
        route: Route,
    ) -> Self {
        let mut driver = Self::new(FeedbackApp::new(gateway, telemetry));
        let startup = driver.app.enter_route(route);
        driver.pending.extend(startup);
        driver.settle();
        driver
    }

    /// Returns the application.
    #[must_use]
    pub const fn app(&self) -> &FeedbackApp {
        &self.app
    }

    /// Returns the number of commands still waiting to complete.
    #[must_use]
    pub fn pending_commands(&self) -> usize {
        self.pending.len()
    }

    /// Returns how many delivered messages were not [`AppMsg`] values, such
    /// as the runtime's quit message.
    #[must_use]
    pub const fn foreign_messages(&self) -> usize {
        self.foreign_messages
    }

    /// Dispatches `msg` and settles the resulting commands.
    pub fn send(&mut self, msg: AppMsg) {
        let cmds = self.app.dispatch(msg);
        self.pending.extend(cmds);
        self.settle();
    }

    /// Maps a key press through the current input context and sends it.
    ///
    /// Returns whether the key meant anything in that context.
    pub fn press(&mut self, key: KeyCode) -> bool {
        let key_msg = KeyMsg {
            key,
            modifiers: KeyModifiers::NONE,
        };
        let Some(msg) = self.app.map_key(&key_msg) else {
            return false;
        };
        self.send(msg);
        true
    }

    /// Presses one key per character of `text`.
    pub fn type_text(&mut self, text: &str) {
        for character in text.chars() {
            let _mapped = self.press(KeyCode::Char(character));
        }
    }

    /// Polls pending commands until none completes, delivering each message.
    ///
    /// Returns the number of messages delivered.
    pub fn settle(&mut self) -> usize {
        let mut delivered = 0_usize;
        loop {
            let ready = self.poll_pending();
            if ready.is_empty() {
                return delivered;
            }
            for message in ready {
                delivered = delivered.saturating_add(1);
                match message.downcast::<AppMsg>() {
                    Ok(app_msg) => {
                        let cmds = self.app.dispatch(*app_msg);
                        self.pending.extend(cmds);
                    }
                    Err(_foreign) => {
                        self.foreign_messages = self.foreign_messages.saturating_add(1);
                    }
                }
            }
        }
    }

    /// Advances the paused tokio clock by `duration`, then settles.
    ///
    /// Returns the number of messages delivered.
    pub async fn advance(&mut self, duration: Duration) -> usize {
        tokio::time::advance(duration).await;
        self.settle()
    }

    fn poll_pending(&mut self) -> Vec<Box<dyn Any + Send>> {
        let mut context = Context::from_waker(Waker::noop());
        let mut ready = Vec::new();
        let mut still_pending = Vec::with_capacity(self.pending.len());

        for mut cmd in self.pending.drain(..) {
            match cmd.as_mut().poll(&mut context) {
                Poll::Ready(Some(message)) => ready.push(message),
                Poll::Ready(None) => {}
                Poll::Pending => still_pending.push(cmd),
            }
        }

        self.pending = still_pending;
        ready
    }
}
