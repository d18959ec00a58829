//! Support modules for dashboard refresh BDD tests.

pub(crate) mod state;

pub(crate) use state::DashboardState;
