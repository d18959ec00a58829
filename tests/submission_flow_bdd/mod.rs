//! Support modules for submission flow BDD tests.

pub(crate) mod state;

pub(crate) use state::FormState;
