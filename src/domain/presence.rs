//! Online-roster state.
//!
//! The server's roster snapshot is authoritative and replaces the set
//! wholesale; join/leave notifications are user feedback only and never
//! touch it.

use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PresenceRoster {
    usernames: Vec<String>,
    cursor: usize,
}

impl PresenceRoster {
    /// Replaces the whole roster, keeping server order and dropping
    /// duplicate names.
    pub fn apply_roster(&mut self, usernames: Vec<String>) {
        let mut seen = HashSet::new();
        self.usernames = usernames
            .into_iter()
            .filter(|name| seen.insert(name.clone()))
            .collect();
        if self.cursor >= self.usernames.len() {
            self.cursor = self.usernames.len().saturating_sub(1);
        }
    }

    pub fn usernames(&self) -> &[String] {
        &self.usernames
    }

    /// The name under the cursor, if the roster is non-empty.
    pub fn selected(&self) -> Option<&str> {
        self.usernames.get(self.cursor).map(String::as_str)
    }

    pub fn cursor(&self) -> Option<usize> {
        if self.usernames.is_empty() {
            None
        } else {
            Some(self.cursor)
        }
    }

    pub fn select_next(&mut self) {
        if self.cursor + 1 < self.usernames.len() {
            self.cursor += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(names: &[&str]) -> PresenceRoster {
        let mut presence = PresenceRoster::default();
        presence.apply_roster(names.iter().map(|n| n.to_string()).collect());
        presence
    }

    #[test]
    fn snapshot_replaces_previous_set() {
        let mut presence = roster(&["alice", "bob"]);
        presence.apply_roster(vec!["carol".to_owned()]);

        assert_eq!(presence.usernames(), ["carol"]);
    }

    #[test]
    fn snapshot_preserves_server_order_and_drops_duplicates() {
        let presence = roster(&["bob", "alice", "bob"]);

        assert_eq!(presence.usernames(), ["bob", "alice"]);
    }

    #[test]
    fn cursor_clamps_when_roster_shrinks() {
        let mut presence = roster(&["alice", "bob", "carol"]);
        presence.select_next();
        presence.select_next();
        assert_eq!(presence.selected(), Some("carol"));

        presence.apply_roster(vec!["alice".to_owned()]);

        assert_eq!(presence.selected(), Some("alice"));
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let mut presence = roster(&["alice", "bob"]);

        presence.select_previous();
        assert_eq!(presence.selected(), Some("alice"));

        presence.select_next();
        presence.select_next();
        assert_eq!(presence.selected(), Some("bob"));
    }

    #[test]
    fn empty_roster_has_no_selection() {
        let presence = PresenceRoster::default();

        assert_eq!(presence.selected(), None);
        assert_eq!(presence.cursor(), None);
    }
}
