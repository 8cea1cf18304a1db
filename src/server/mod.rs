//! Server integration layer: directory fetch, event stream, wire codec.

pub mod connection;
pub mod directory;
pub mod wire;

/// Returns the server module name for smoke checks.
pub fn module_name() -> &'static str {
    "server"
}
