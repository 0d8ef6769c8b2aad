//! Recompute request gate with coalescing.

use std::sync::{Condvar, Mutex, PoisonError};

/// What the worker should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerCommand {
    /// Run one recompute pass.
    Recompute,
    /// Exit the worker loop.
    Shutdown,
}

#[derive(Debug, Default)]
struct GateState {
    pending: bool,
    stopped: bool,
}

/// Wakes the computation worker for coalesced recompute requests.
///
/// The pending state is a single boolean, not a counted queue: requests
/// arriving while the worker is busy collapse into one subsequent pass, so a
/// rapid burst of ticks never queues unbounded work. A stop request wins over
/// a pending recompute and is idempotent.
#[derive(Debug, Default)]
pub struct RequestGate {
    state: Mutex<GateState>,
    wake: Condvar,
}

impl RequestGate {
    /// Creates a gate with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts a recompute request. Never blocks; duplicates coalesce.
    pub fn request(&self) {
        let mut state = crate::lock_unpoisoned(&self.state);
        state.pending = true;
        self.wake.notify_one();
    }

    /// Stops the worker. Idempotent and safe to call from any context.
    pub fn stop(&self) {
        let mut state = crate::lock_unpoisoned(&self.state);
        state.stopped = true;
        self.wake.notify_one();
    }

    /// Whether a stop has been posted.
    pub fn is_stopped(&self) -> bool {
        crate::lock_unpoisoned(&self.state).stopped
    }

    /// Blocks until a request or a stop arrives.
    ///
    /// Consumes the pending flag on wake, so every burst of requests yields
    /// exactly one [`WorkerCommand::Recompute`].
    pub fn await_command(&self) -> WorkerCommand {
        let mut state = crate::lock_unpoisoned(&self.state);
        loop {
            if state.stopped {
                return WorkerCommand::Shutdown;
            }
            if state.pending {
                state.pending = false;
                return WorkerCommand::Recompute;
            }
            state = self
                .wake
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }
}
