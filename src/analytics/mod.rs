mod queries;
mod risk;

use std::sync::Arc;

use crate::store::Snapshot;

/// Query layer over an immutable [`Snapshot`].
///
/// Every query is a pure function of the snapshot contents: no cross-call
/// state, identical results on repeated calls. Callers wanting statistics
/// over a subset of records build a fresh snapshot from that subset.
pub struct Analytics {
    snapshot: Arc<Snapshot>
}

impl Analytics {
    pub fn new(snapshot: Arc<Snapshot>) -> Self {
        Self {
            snapshot
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}
