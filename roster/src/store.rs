//! Group store: core mutations wired to persistence.
//!
//! The store owns the in-memory collection and a snapshot backend. Every
//! mutation that changes state synchronously writes the full collection back
//! through the backend. Persistence failures are logged and never propagated:
//! the in-memory state stays authoritative for the rest of the session.

use tracing::warn;

use crate::core::roster::{Roster, ToggleOutcome};
use crate::core::snapshot::{decode_snapshot, encode_snapshot};
use crate::group::Group;
use crate::io::confirm::Confirmation;
use crate::io::snapshot_store::SnapshotBackend;

/// Persisted, ordered collection of groups.
pub struct GroupStore<B: SnapshotBackend> {
    roster: Roster,
    backend: B,
}

impl<B: SnapshotBackend> GroupStore<B> {
    /// Load the persisted snapshot and build the store over it.
    ///
    /// Startup never fails: a missing snapshot starts empty, and a malformed
    /// one (or a backend read error) is discarded with a logged diagnostic.
    pub fn open(backend: B) -> Self {
        let roster = match backend.load() {
            Ok(Some(raw)) => {
                let decoded = decode_snapshot(&raw);
                for issue in &decoded.issues {
                    warn!("snapshot recovery: {issue}");
                }
                Roster::from_groups(decoded.groups)
            }
            Ok(None) => Roster::new(),
            Err(err) => {
                warn!("snapshot load failed: {err:#}; starting empty");
                Roster::new()
            }
        };
        Self { roster, backend }
    }

    /// All groups in insertion order.
    pub fn groups(&self) -> &[Group] {
        self.roster.groups()
    }

    pub fn get(&self, id: u64) -> Option<&Group> {
        self.roster.get(id)
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Create a group and persist. Returns `None` (and writes nothing) when
    /// the input fails validation.
    pub fn create(&mut self, name: &str, count: Option<u32>) -> Option<Group> {
        let created = self.roster.create(name, count)?.clone();
        self.persist();
        Some(created)
    }

    /// Update a group's name and count in place and persist. Unknown id or
    /// invalid input is a no-op without a write.
    pub fn update(&mut self, id: u64, name: &str, count: Option<u32>) -> bool {
        if !self.roster.update(id, name, count) {
            return false;
        }
        self.persist();
        true
    }

    /// Toggle a group's status. Persists only when the status actually
    /// changed (`unknown` is sticky and unknown ids are no-ops).
    pub fn toggle_status(&mut self, id: u64) -> ToggleOutcome {
        let outcome = self.roster.toggle_status(id);
        if matches!(outcome, ToggleOutcome::Changed(_)) {
            self.persist();
        }
        outcome
    }

    /// Delete a group and persist. Unknown id is a no-op without a write.
    pub fn delete(&mut self, id: u64) -> bool {
        if !self.roster.delete(id) {
            return false;
        }
        self.persist();
        true
    }

    /// Clear every group and the persisted snapshot, gated on `confirmation`.
    ///
    /// Declined means no state change and no write. Returns whether the reset
    /// went through.
    pub fn reset_all<C: Confirmation>(&mut self, confirmation: &C) -> bool {
        if !confirmation.confirm("Delete all groups? This cannot be undone.") {
            return false;
        }
        self.roster.clear();
        if let Err(err) = self.backend.clear() {
            warn!("snapshot clear failed: {err:#}");
        }
        true
    }

    fn persist(&self) {
        let payload = match encode_snapshot(self.roster.groups()) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("snapshot serialize failed: {err}; in-memory state retained");
                return;
            }
        };
        if let Err(err) = self.backend.save(&payload) {
            warn!("snapshot write failed: {err:#}; in-memory state retained");
        }
    }
}
