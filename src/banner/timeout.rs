//! Cancellable one-shot timer for banner auto-dismissal
//!
//! The timer is a spawned task that sleeps and then posts `TimeoutFired`
//! back into the manager's command queue. Cancellation aborts the task;
//! because the firing may already be in flight when the abort lands, every
//! firing carries a sequence number that the manager validates before acting.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::banner::event::BannerId;
use crate::banner::manager::ManagerCommand;

pub(crate) struct AutoDismissTimer {
    seq: u64,
    handle: JoinHandle<()>,
}

impl AutoDismissTimer {
    /// Schedule a one-shot firing for `id` after `duration`.
    pub(crate) fn schedule(
        seq: u64,
        id: BannerId,
        duration: Duration,
        commands: UnboundedSender<ManagerCommand>,
    ) -> Self {
        log::trace!("banner {}: timeout #{} armed for {:?}", id, seq, duration);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            // The manager may already have moved on; it checks both the id
            // and the sequence before acting on this.
            let _ = commands.send(ManagerCommand::TimeoutFired { id, seq });
        });
        Self { seq, handle }
    }

    pub(crate) fn seq(&self) -> u64 {
        self.seq
    }

    /// Cancel the pending firing. Cancelling a timer that has already fired
    /// is a no-op.
    pub(crate) fn cancel(self) {
        // Drop aborts the sleep task.
    }
}

impl Drop for AutoDismissTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
