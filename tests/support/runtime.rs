//! Paused Tokio runtime shared across the steps of a scenario.

use std::future::Future;
use std::io;
use std::rc::Rc;

use rstest_bdd::Slot;
use tokio::runtime::{Builder, EnterGuard, Runtime};

/// Shared runtime wrapper that can be stored in an `rstest-bdd` Slot.
///
/// The clock starts paused, so timers only fire when a step advances it.
#[derive(Clone)]
pub struct SharedRuntime(Rc<Runtime>);

impl SharedRuntime {
    /// Builds a current-thread runtime with a paused clock.
    pub fn paused() -> io::Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_time()
            .start_paused(true)
            .build()?;
        Ok(Self(Rc::new(runtime)))
    }

    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.0.block_on(future)
    }

    /// Enters the runtime context so commands can create timers.
    pub fn enter(&self) -> EnterGuard<'_> {
        self.0.enter()
    }
}

/// Ensures a paused runtime is initialised.
///
/// # Errors
///
/// Returns an error if the Tokio runtime cannot be created or if the slot behaves unexpectedly.
pub fn ensure_runtime(runtime: &Slot<SharedRuntime>) -> Result<SharedRuntime, io::Error> {
    if runtime.with_ref(|_| ()).is_none() {
        runtime.set(SharedRuntime::paused()?);
    }

    runtime
        .get()
        .ok_or_else(|| io::Error::other("runtime not initialised after set"))
}
