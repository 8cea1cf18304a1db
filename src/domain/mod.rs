//! Domain layer: core entities and conversation rules.

pub mod composer;
pub mod conversation;
pub mod events;
pub mod message;
pub mod notice;
pub mod presence;
pub mod private_session;
pub mod shell_state;
pub mod transcript;
pub mod user;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
