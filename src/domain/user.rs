use serde::Deserialize;

/// A directory entry from the user service.
///
/// Identity is the id; the username is a display label that is also used
/// for lookup. The directory is fetched once at startup, so a rename on the
/// server is not picked up until the next run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// The locally logged-in user.
///
/// The id is only known once the directory payload has arrived; until then
/// (or when the directory is unavailable) it stays `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalUser {
    username: String,
    id: Option<i64>,
}

impl LocalUser {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            id: None,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    /// True when the given username, or the id it resolved to, denotes the
    /// local user. Self-chat is forbidden at selection and send time.
    pub fn is_self(&self, username: &str, resolved_id: Option<i64>) -> bool {
        username == self.username || (resolved_id.is_some() && resolved_id == self.id)
    }
}
