//! IncrementalController (C7): wraps the Scanner, runs it with a
//! pre-loaded FileCache, and diffs the resulting facts against a previous
//! snapshot to produce `{added, removed}`.

use std::collections::HashSet;
use std::path::Path;

use edb_core::errors::ScanError;
use edb_core::events::ScanEventHandler;
use edb_core::facts::Fact;
use edb_core::{CancellationToken, ScanConfig};

use crate::scanner::{FileCache, Scanner};

/// A previous scan's fact set, as a set of `(predicate, args)` tuples —
/// exactly the granularity the controller diffs against.
pub type Snapshot = HashSet<Fact>;

#[derive(Debug, Clone, Default)]
pub struct ScanDelta {
    pub added: Vec<Fact>,
    pub removed: Vec<Fact>,
}

pub struct IncrementalController {
    scanner: Scanner,
}

impl IncrementalController {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            scanner: Scanner::new(config),
        }
    }

    /// Runs a scan against `root` with `cache` pre-loaded, and diffs the
    /// resulting facts against `previous`. "Removed" includes every fact
    /// whose path is no longer reachable or whose content hash changed,
    /// which a stale fact naturally satisfies: the new scan simply never
    /// re-emits it.
    pub fn run(
        &self,
        root: &Path,
        cache: &FileCache,
        previous: &Snapshot,
        cancel: &CancellationToken,
        handler: &dyn ScanEventHandler,
    ) -> Result<ScanDelta, ScanError> {
        let result = self.scanner.scan_workspace(root, cache, cancel, handler)?;

        let current: HashSet<Fact> = result.facts.into_iter().collect();
        let added = current.difference(previous).cloned().collect();
        let removed = previous.difference(&current).cloned().collect();

        Ok(ScanDelta { added, removed })
    }

    /// Produces a snapshot (for the next call's `previous`) from a fact set.
    pub fn snapshot_of(facts: Vec<Fact>) -> Snapshot {
        facts.into_iter().collect()
    }
}
