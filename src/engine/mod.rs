//! Authoritative game state and move requests.
//!
//! The protocol front end talks to an [`Engine`]; the engine hands snapshots
//! to the search and applies its result only after every worker has reported.

mod controller;

pub use controller::Engine;
