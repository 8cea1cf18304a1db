//! Transient user-facing notices with a fixed auto-dismiss window.

use std::time::{Duration, Instant};

/// How long a notice stays visible before it is pruned.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub level: NoticeLevel,
    posted_at: Instant,
}

/// Holds the currently visible notices, newest last. Expiry is driven by
/// the shell tick; there is no timer of its own.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    notices: Vec<Notice>,
}

impl NoticeBoard {
    pub fn push(&mut self, text: impl Into<String>, level: NoticeLevel, now: Instant) {
        self.notices.push(Notice {
            text: text.into(),
            level,
            posted_at: now,
        });
    }

    /// Drops every notice whose visibility window has elapsed.
    pub fn prune(&mut self, now: Instant) {
        self.notices
            .retain(|notice| now.duration_since(notice.posted_at) < NOTICE_TTL);
    }

    pub fn active(&self) -> &[Notice] {
        &self.notices
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.notices.last()
    }
}
