//! Websocket chat client for the `messageType`-dialect backend.
//!
//! Near-duplicate of the sibling `chat-client` crate: same event-loop
//! architecture, different wire dialect. This variant authenticates with a
//! password in the connect path, tracks the logged-in username, and surfaces
//! an invalid-password alert. The wire types live locally in `net::types`
//! rather than in a shared crate.

pub mod action;
pub mod input;
pub mod net;
pub mod state;
pub mod storage;
pub mod store;
