//! Username to user-id resolution backed by the directory service.

use std::collections::HashMap;

use crate::domain::user::User;

/// Mapping from display name to stable user id.
///
/// Rebuilt wholesale from a directory payload; the old mapping is never
/// partially visible. Starts empty and stays empty when the directory is
/// unavailable, which degrades private sends to resolution failures while
/// public chat keeps working.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IdentityIndex {
    by_username: HashMap<String, i64>,
}

impl IdentityIndex {
    /// Replaces the whole index from a directory payload.
    pub fn rebuild(&mut self, users: &[User]) {
        self.by_username = users
            .iter()
            .map(|user| (user.username.clone(), user.id))
            .collect();
    }

    /// Looks up the id paired with `username`, or reports not-found.
    pub fn resolve(&self, username: &str) -> Option<i64> {
        self.by_username.get(username).copied()
    }
}
