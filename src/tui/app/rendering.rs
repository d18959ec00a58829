//! Rendering logic for the feedback console.
//!
//! Pure query methods producing the frame for the active route. The model
//! implementation normalises the result to the terminal size.

use super::{FeedbackApp, MountedDashboard};
use crate::tui::Route;
use crate::tui::components::{
    FeedbackFormComponent, FeedbackFormViewContext, StatsPanelComponent, StatsPanelViewContext,
    SubmissionDetailComponent, SubmissionDetailViewContext, SubmissionTableComponent,
    SubmissionTableViewContext,
};

/// Widest the content area grows on large terminals.
const MAX_CONTENT_WIDTH: usize = 100;

/// Rows used by the form outside the review text.
const FORM_CHROME_HEIGHT: usize = 12;

/// Rows used by the dashboard outside the table body: header, page bar,
/// stats panel with spacing, column header and status bar.
const DASHBOARD_CHROME_HEIGHT: usize = 14;

const FORM_HINTS: &str = "type:review  ←/→:rating  Enter:submit  Tab:dashboard  F1:help  Esc:quit";
const DASHBOARD_HINTS: &str =
    "j/k:move  Enter:details  n/p:page  f:filter  r:refresh  Tab:form  ?:help  q:quit";
const DETAIL_HINTS: &str = "Esc:close";

impl FeedbackApp {
    /// Renders the frame for the current state, before normalisation.
    pub(super) fn render_frame(&self) -> String {
        if self.show_help {
            return self.render_help_overlay();
        }

        let mut output = self.render_header();
        match (self.route, self.dashboard.as_ref()) {
            (Route::Feedback, _) => output.push_str(&self.render_form()),
            (Route::Admin, Some(mounted)) => output.push_str(&self.render_dashboard(mounted)),
            (Route::Admin, None) => output.push_str("Dashboard not mounted.\n"),
        }
        output.push_str(&self.render_status_bar());
        output
    }

    fn content_width(&self) -> usize {
        usize::from(self.width).clamp(1, MAX_CONTENT_WIDTH)
    }

    /// Renders the header bar.
    fn render_header(&self) -> String {
        let loading = self
            .dashboard()
            .filter(|dashboard| self.route == Route::Admin && dashboard.is_loading())
            .map_or("", |_| " [Loading...]");
        format!("Feedback Console - {}{loading}\n\n", self.route.title())
    }

    fn render_form(&self) -> String {
        let ctx = FeedbackFormViewContext {
            flow: &self.form,
            max_width: self.content_width(),
            review_height: usize::from(self.height)
                .saturating_sub(FORM_CHROME_HEIGHT)
                .max(1),
        };
        FeedbackFormComponent::new().view(&ctx)
    }

    fn render_dashboard(&self, mounted: &MountedDashboard) -> String {
        let dashboard = &mounted.state;
        let width = self.content_width();

        if dashboard.selected().is_some() {
            let ctx = SubmissionDetailViewContext {
                selected: dashboard.selected(),
                max_width: width,
                max_height: usize::from(self.height).saturating_sub(3),
            };
            return SubmissionDetailComponent::new().view(&ctx);
        }

        let mut output = Self::render_page_bar(mounted);
        output.push('\n');
        output.push_str(&StatsPanelComponent::new().view(&StatsPanelViewContext {
            stats: dashboard.stats(),
        }));
        output.push('\n');

        let table_ctx = SubmissionTableViewContext {
            submissions: dashboard.submissions(),
            cursor_position: dashboard.cursor(),
            max_width: width,
            visible_height: usize::from(self.height).saturating_sub(DASHBOARD_CHROME_HEIGHT),
        };
        output.push_str(&SubmissionTableComponent::new().view(&table_ctx));
        output
    }

    /// Renders the filter, page position and pager controls.
    fn render_page_bar(mounted: &MountedDashboard) -> String {
        let dashboard = &mounted.state;
        let total = dashboard
            .reported_total()
            .map_or_else(String::new, |total| format!(" ({total} total)"));
        let prev = if dashboard.has_prev_page() { "< prev" } else { "      " };
        let next = if dashboard.has_next_page() { "next >" } else { "      " };

        format!(
            "Filter: {}   Page {}{total}   {prev}  {next}\n",
            dashboard.filter().label(),
            dashboard.page().current_page()
        )
    }

    /// Renders the status bar with key hints for the current context.
    fn render_status_bar(&self) -> String {
        let hints = match (self.route, self.dashboard()) {
            (Route::Feedback, _) => FORM_HINTS,
            (Route::Admin, Some(dashboard)) if dashboard.selected().is_some() => DETAIL_HINTS,
            (Route::Admin, _) => DASHBOARD_HINTS,
        };
        format!("\n{hints}\n")
    }

    /// Renders the help overlay for the current route.
    fn render_help_overlay(&self) -> String {
        let bindings: &[(&str, &str)] = match self.route {
            Route::Feedback => &[
                ("any character", "Edit the review"),
                ("Backspace", "Delete the last character"),
                ("Left/Right", "Change the rating"),
                ("Enter", "Submit"),
                ("Tab", "Switch to the dashboard"),
                ("F1", "Toggle this help"),
                ("Esc, Ctrl+C", "Quit"),
            ],
            Route::Admin => &[
                ("j/k, Up/Down", "Move the cursor"),
                ("g/G, Home/End", "First or last row"),
                ("Enter", "Show submission details"),
                ("n/p", "Next or previous page"),
                ("f", "Cycle the filter"),
                ("r", "Refresh now"),
                ("Tab", "Switch to the feedback form"),
                ("?", "Toggle this help"),
                ("q, Ctrl+C", "Quit"),
            ],
        };

        let mut output = format!("=== {} ===\n\n", self.route.title());
        for (keys, action) in bindings {
            output.push_str(&format!("  {keys:<16} {action}\n"));
        }
        output.push_str("\nPress any key to close this help\n");
        output
    }
}
