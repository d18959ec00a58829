//! Dashboard handlers: mounting, refresh and the refresh interval.
//!
//! Mounting creates a fresh [`Dashboard`](crate::tui::state::Dashboard),
//! dispatches the first refresh and arms the interval. Each interval tick
//! dispatches a refresh and re-arms immediately, so the cadence does not
//! depend on how long fetches take. Changing page or filter restarts the
//! interval. Unmounting drops the interval handle, which cancels it.
//!
//! Ticks and refresh results carry the mount id, and ticks also carry the
//! interval generation; anything addressed to an earlier mount or arm is
//! dropped.

use std::any::Any;
use std::sync::Arc;

use bubbletea_rs::Cmd;
use tokio::time::Instant;

use super::{FeedbackApp, MountedDashboard};
use crate::api::FeedbackGateway;
use crate::telemetry::{TelemetryEvent, duration_millis};
use crate::tui::messages::AppMsg;
use crate::tui::state::{REFRESH_INTERVAL, RefreshOutcome, RefreshRequest, RefreshTrigger};
use crate::tui::timer::ScheduledTimer;

impl MountedDashboard {
    /// Starts a refresh if the dashboard accepts `trigger`.
    fn refresh(
        &mut self,
        trigger: RefreshTrigger,
        gateway: &Arc<dyn FeedbackGateway>,
    ) -> Option<Cmd> {
        let request = self.state.begin_refresh(trigger)?;
        Some(refresh_cmd(Arc::clone(gateway), self.mount_id, request))
    }

    /// Replaces the interval timer. The previous one is cancelled on drop.
    fn arm_interval(&mut self) -> Cmd {
        self.interval_generation = self.interval_generation.wrapping_add(1);
        let (timer, cmd) = ScheduledTimer::schedule(
            REFRESH_INTERVAL,
            AppMsg::RefreshTick {
                mount: self.mount_id,
                generation: self.interval_generation,
            },
        );
        self.interval = Some(timer);
        cmd
    }

    /// Refreshes and restarts the interval.
    fn refresh_and_rearm(
        &mut self,
        trigger: RefreshTrigger,
        gateway: &Arc<dyn FeedbackGateway>,
    ) -> Vec<Cmd> {
        let mut cmds: Vec<Cmd> = self.refresh(trigger, gateway).into_iter().collect();
        cmds.push(self.arm_interval());
        cmds
    }
}

impl FeedbackApp {
    /// Mounts a fresh dashboard, replacing any mounted one.
    pub(super) fn mount_dashboard(&mut self) -> Vec<Cmd> {
        self.mounts = self.mounts.wrapping_add(1);
        let mut mounted = MountedDashboard::new(self.mounts);
        tracing::debug!(mount = mounted.mount_id, "dashboard mounted");

        let cmds = mounted.refresh_and_rearm(RefreshTrigger::Mount, &self.gateway);
        self.dashboard = Some(mounted);
        cmds
    }

    /// Drops the dashboard and, with it, the refresh interval.
    pub(super) fn unmount_dashboard(&mut self) {
        if let Some(mounted) = self.dashboard.take() {
            tracing::debug!(mount = mounted.mount_id, "dashboard unmounted");
        }
    }

    /// Dispatches dashboard navigation messages to their handlers.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Vec<Cmd> {
        let Some(mounted) = self.dashboard.as_mut() else {
            return Vec::new();
        };
        let dashboard = &mut mounted.state;

        match msg {
            AppMsg::CursorUp => dashboard.cursor_up(),
            AppMsg::CursorDown => dashboard.cursor_down(),
            AppMsg::Home => dashboard.cursor_home(),
            AppMsg::End => dashboard.cursor_end(),
            AppMsg::OpenDetail => {
                let _opened = dashboard.open_selected();
            }
            AppMsg::NextPage => {
                if dashboard.next_page() {
                    return mounted.refresh_and_rearm(RefreshTrigger::PageChanged, &self.gateway);
                }
            }
            AppMsg::PrevPage => {
                if dashboard.prev_page() {
                    return mounted.refresh_and_rearm(RefreshTrigger::PageChanged, &self.gateway);
                }
            }
            AppMsg::CycleFilter => {
                let _filter = dashboard.cycle_filter();
                return mounted.refresh_and_rearm(RefreshTrigger::FilterChanged, &self.gateway);
            }
            _ => {
                // Unreachable: caller filters to navigation messages.
            }
        }
        Vec::new()
    }

    /// Dispatches refresh messages to their handlers.
    pub(super) fn handle_data_msg(&mut self, msg: AppMsg) -> Vec<Cmd> {
        match msg {
            AppMsg::RefreshRequested => self.handle_manual_refresh(),
            AppMsg::RefreshTick { mount, generation } => self.handle_tick(mount, generation),
            AppMsg::RefreshCompleted {
                mount,
                outcome,
                latency_ms,
            } => {
                self.handle_refresh_completed(mount, outcome, latency_ms);
                Vec::new()
            }
            _ => {
                // Unreachable: caller filters to data messages.
                Vec::new()
            }
        }
    }

    fn handle_manual_refresh(&mut self) -> Vec<Cmd> {
        self.dashboard
            .as_mut()
            .and_then(|mounted| mounted.refresh(RefreshTrigger::Manual, &self.gateway))
            .into_iter()
            .collect()
    }

    fn handle_tick(&mut self, mount: u64, generation: u64) -> Vec<Cmd> {
        let Some(mounted) = self.dashboard.as_mut().filter(|mounted| {
            mounted.mount_id == mount && mounted.interval_generation == generation
        }) else {
            tracing::debug!(mount, generation, "ignoring stale refresh tick");
            return Vec::new();
        };

        mounted.refresh_and_rearm(RefreshTrigger::Interval, &self.gateway)
    }

    fn handle_refresh_completed(&mut self, mount: u64, outcome: RefreshOutcome, latency_ms: u64) {
        let Some(mounted) = self
            .dashboard
            .as_mut()
            .filter(|mounted| mounted.mount_id == mount)
        else {
            tracing::debug!(
                mount,
                sequence = outcome.sequence,
                "discarding refresh for unmounted dashboard"
            );
            return;
        };

        self.telemetry.record(TelemetryEvent::DashboardRefreshed {
            sequence: outcome.sequence,
            latency_ms,
            item_count: outcome.list.as_ref().map_or(0, |page| page.items.len()),
            list_ok: outcome.list.is_ok(),
            stats_ok: outcome.stats.is_ok(),
        });
        mounted.state.apply_refresh(outcome);
    }
}

/// Creates a command running both fetches of one refresh concurrently.
fn refresh_cmd(gateway: Arc<dyn FeedbackGateway>, mount: u64, request: RefreshRequest) -> Cmd {
    Box::pin(async move {
        let started = Instant::now();
        let RefreshRequest { sequence, params } = request;
        let (list, stats) = tokio::join!(gateway.list_submissions(&params), gateway.statistics());
        let latency_ms = duration_millis(started.elapsed());

        Some(Box::new(AppMsg::RefreshCompleted {
            mount,
            outcome: RefreshOutcome {
                sequence,
                list,
                stats,
            },
            latency_ms,
        }) as Box<dyn Any + Send>)
    })
}
