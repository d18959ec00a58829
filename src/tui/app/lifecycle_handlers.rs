//! Lifecycle and window handlers for the feedback console.
//!
//! Route switching mounts or unmounts the dashboard. Escape closes the
//! topmost overlay before it quits.

use bubbletea_rs::Cmd;

use super::FeedbackApp;
use crate::tui::Route;
use crate::tui::messages::AppMsg;

impl FeedbackApp {
    /// Dispatches lifecycle and window messages to their handlers.
    pub(super) fn handle_lifecycle_msg(&mut self, msg: AppMsg) -> Vec<Cmd> {
        match msg {
            AppMsg::SwitchRoute => self.enter_route(self.route.toggled()),
            AppMsg::EscapePressed => self.handle_escape(),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                Vec::new()
            }
            AppMsg::Quit => vec![bubbletea_rs::quit()],
            AppMsg::WindowResized { width, height } => {
                self.width = width;
                self.height = height;
                Vec::new()
            }
            _ => {
                // Unreachable: caller filters to lifecycle messages.
                Vec::new()
            }
        }
    }

    /// Shows `route`, mounting the dashboard when entering the admin route
    /// and unmounting it when leaving.
    ///
    /// The form keeps its draft across switches. Entering the route that is
    /// already active does nothing.
    pub fn enter_route(&mut self, route: Route) -> Vec<Cmd> {
        let mounted = self.dashboard.is_some();
        self.route = route;
        match route {
            Route::Admin if !mounted => self.mount_dashboard(),
            Route::Admin => Vec::new(),
            Route::Feedback => {
                self.unmount_dashboard();
                Vec::new()
            }
        }
    }

    fn handle_escape(&mut self) -> Vec<Cmd> {
        if self.show_help {
            self.show_help = false;
            return Vec::new();
        }

        match (self.route, self.dashboard.as_mut()) {
            (Route::Admin, Some(mounted)) => {
                mounted.state.close_detail();
                Vec::new()
            }
            (Route::Admin, None) => Vec::new(),
            (Route::Feedback, _) => vec![bubbletea_rs::quit()],
        }
    }
}
