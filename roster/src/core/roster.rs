//! Ordered group collection and its mutation rules.

use crate::group::{Group, Status};

/// Result of a toggle request, so callers can skip persistence when nothing
/// changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Status flipped between `pending` and `ok`.
    Changed(Status),
    /// Group exists but its status is `unknown`, which toggling never leaves.
    Sticky,
    /// No group with the requested id.
    NotFound,
}

/// The in-memory group collection, kept in insertion order.
///
/// Ids come from a monotonic counter. After restoring a snapshot the counter
/// resumes past the largest stored id, so ids stay unique across restarts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    groups: Vec<Group>,
    next_id: u64,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuild from restored groups, preserving their stored order.
    pub fn from_groups(groups: Vec<Group>) -> Self {
        let next_id = groups.iter().map(|group| group.id).max().map_or(1, |max| max + 1);
        Self { groups, next_id }
    }

    /// All groups in insertion order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn get(&self, id: u64) -> Option<&Group> {
        self.groups.iter().find(|group| group.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Append a new group. `count: None` models the empty count input.
    ///
    /// A blank name or missing count is a silent no-op: the caller is expected
    /// to have constrained input, so nothing is created and no error surfaces.
    pub fn create(&mut self, name: &str, count: Option<u32>) -> Option<&Group> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let count = count?;
        let group = Group {
            id: self.next_id,
            name: name.to_string(),
            count,
            status: Status::initial(count),
        };
        self.next_id += 1;
        self.groups.push(group);
        self.groups.last()
    }

    /// Replace a group's name and count in place, preserving its position and
    /// status. Unknown id or invalid input is a no-op. Returns whether the
    /// group was updated.
    pub fn update(&mut self, id: u64, name: &str, count: Option<u32>) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        let Some(count) = count else {
            return false;
        };
        let Some(group) = self.groups.iter_mut().find(|group| group.id == id) else {
            return false;
        };
        group.name = name.to_string();
        group.count = count;
        true
    }

    /// Flip a group between `pending` and `ok`. `unknown` stays `unknown`.
    pub fn toggle_status(&mut self, id: u64) -> ToggleOutcome {
        let Some(group) = self.groups.iter_mut().find(|group| group.id == id) else {
            return ToggleOutcome::NotFound;
        };
        let next = group.status.toggled();
        if next == group.status {
            return ToggleOutcome::Sticky;
        }
        group.status = next;
        ToggleOutcome::Changed(next)
    }

    /// Remove a group in place. Returns whether anything was removed.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.groups.len();
        self.groups.retain(|group| group.id != id);
        self.groups.len() != before
    }

    /// Drop every group. The id counter keeps advancing so ids are never
    /// reused within a session.
    pub fn clear(&mut self) {
        self.groups.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::group;

    #[test]
    fn create_assigns_pending_status_for_positive_count() {
        let mut roster = Roster::new();
        let created = roster.create("Team A", Some(5)).expect("created");
        assert_eq!(created.name, "Team A");
        assert_eq!(created.count, 5);
        assert_eq!(created.status, Status::Pending);
    }

    #[test]
    fn create_assigns_unknown_status_for_zero_count() {
        let mut roster = Roster::new();
        let created = roster.create("Ghosts", Some(0)).expect("created");
        assert_eq!(created.status, Status::Unknown);
    }

    #[test]
    fn create_trims_name() {
        let mut roster = Roster::new();
        let created = roster.create("  Team A  ", Some(5)).expect("created");
        assert_eq!(created.name, "Team A");
    }

    #[test]
    fn create_rejects_blank_name() {
        let mut roster = Roster::new();
        assert!(roster.create("   ", Some(5)).is_none());
        assert!(roster.is_empty());
    }

    #[test]
    fn create_rejects_missing_count() {
        let mut roster = Roster::new();
        assert!(roster.create("Team A", None).is_none());
        assert!(roster.is_empty());
    }

    #[test]
    fn created_ids_are_pairwise_distinct() {
        let mut roster = Roster::new();
        for n in 0..20 {
            roster.create(&format!("group {n}"), Some(n)).expect("created");
        }
        let mut ids: Vec<u64> = roster.groups().iter().map(|group| group.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn groups_keep_insertion_order() {
        let mut roster = Roster::new();
        roster.create("first", Some(1)).expect("created");
        roster.create("second", Some(2)).expect("created");
        roster.create("third", Some(3)).expect("created");
        let names: Vec<&str> = roster.groups().iter().map(|group| group.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn update_replaces_fields_preserving_status_and_position() {
        let mut roster = Roster::new();
        let id = roster.create("Team A", Some(5)).expect("created").id;
        roster.create("Team B", Some(3)).expect("created");

        assert!(roster.update(id, "Team Z", Some(8)));
        let updated = &roster.groups()[0];
        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Team Z");
        assert_eq!(updated.count, 8);
        assert_eq!(updated.status, Status::Pending);
    }

    #[test]
    fn update_does_not_rederive_status_on_zero_count() {
        let mut roster = Roster::new();
        let id = roster.create("Team A", Some(5)).expect("created").id;
        assert!(roster.update(id, "Team A", Some(0)));
        assert_eq!(roster.get(id).expect("group").status, Status::Pending);
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let mut roster = Roster::new();
        roster.create("Team A", Some(5)).expect("created");
        let before = roster.clone();
        assert!(!roster.update(999, "Team B", Some(1)));
        assert_eq!(roster, before);
    }

    #[test]
    fn update_rejects_blank_name() {
        let mut roster = Roster::new();
        let id = roster.create("Team A", Some(5)).expect("created").id;
        assert!(!roster.update(id, "  ", Some(8)));
        assert_eq!(roster.get(id).expect("group").name, "Team A");
    }

    #[test]
    fn toggle_cycles_pending_and_ok() {
        let mut roster = Roster::new();
        let id = roster.create("Team A", Some(5)).expect("created").id;
        assert_eq!(roster.toggle_status(id), ToggleOutcome::Changed(Status::Ok));
        assert_eq!(roster.toggle_status(id), ToggleOutcome::Changed(Status::Pending));
    }

    #[test]
    fn toggle_is_sticky_for_unknown_status() {
        let mut roster = Roster::new();
        let id = roster.create("Ghosts", Some(0)).expect("created").id;
        for _ in 0..3 {
            assert_eq!(roster.toggle_status(id), ToggleOutcome::Sticky);
        }
        assert_eq!(roster.get(id).expect("group").status, Status::Unknown);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut roster = Roster::new();
        assert_eq!(roster.toggle_status(7), ToggleOutcome::NotFound);
    }

    #[test]
    fn delete_removes_in_place_preserving_order() {
        let mut roster = Roster::new();
        let first = roster.create("first", Some(1)).expect("created").id;
        roster.create("second", Some(2)).expect("created");
        roster.create("third", Some(3)).expect("created");

        assert!(roster.delete(first));
        let names: Vec<&str> = roster.groups().iter().map(|group| group.name.as_str()).collect();
        assert_eq!(names, vec!["second", "third"]);
    }

    #[test]
    fn delete_unknown_id_leaves_collection_unchanged() {
        let mut roster = Roster::new();
        roster.create("Team A", Some(5)).expect("created");
        let before = roster.clone();
        assert!(!roster.delete(999));
        assert_eq!(roster, before);
    }

    #[test]
    fn clear_empties_collection() {
        let mut roster = Roster::new();
        roster.create("Team A", Some(5)).expect("created");
        roster.create("Team B", Some(3)).expect("created");
        roster.clear();
        assert!(roster.is_empty());
    }

    #[test]
    fn from_groups_resumes_id_counter_past_stored_ids() {
        let restored = vec![group(3, "Team A", 5, Status::Pending), group(7, "Team B", 2, Status::Ok)];
        let mut roster = Roster::from_groups(restored);
        let created = roster.create("Team C", Some(1)).expect("created");
        assert_eq!(created.id, 8);
    }

    #[test]
    fn from_groups_preserves_stored_order() {
        let restored = vec![group(9, "z", 1, Status::Ok), group(2, "a", 1, Status::Pending)];
        let roster = Roster::from_groups(restored.clone());
        assert_eq!(roster.groups(), restored.as_slice());
    }
}
