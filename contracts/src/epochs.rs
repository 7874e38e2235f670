//! Epoch snapshot tracking.
//!
//! An append-only log of closed accounting epochs, keyed by a monotonically
//! increasing id. Exactly one epoch is open at a time; closing it stamps the
//! end time and opens the next id. Closed snapshots are never rewritten.

use odra::prelude::*;

use crate::types::EpochSnapshot;

/// Sequencer for reward-accounting epochs.
#[odra::module]
pub struct EpochSnapshotTracker {
    /// Id of the currently open epoch
    current: Var<u64>,
    /// End timestamps of closed epochs
    end_times: Mapping<u64, u64>,
}

impl EpochSnapshotTracker {
    /// Id of the open epoch (starts at 0).
    pub fn current_epoch(&self) -> u64 {
        self.current.get_or_default()
    }

    /// Close the open epoch at `now` and open the next one.
    /// Returns the closed snapshot.
    pub fn close(&mut self, now: u64) -> EpochSnapshot {
        let epoch_id = self.current_epoch();
        self.end_times.set(&epoch_id, now);
        self.current.set(epoch_id + 1);
        EpochSnapshot { epoch_id, end_time: now }
    }

    /// Snapshot of a closed epoch, `None` for the open epoch or future ids.
    pub fn snapshot(&self, epoch_id: u64) -> Option<EpochSnapshot> {
        self.end_times
            .get(&epoch_id)
            .map(|end_time| EpochSnapshot { epoch_id, end_time })
    }
}
