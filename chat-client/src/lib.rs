//! Websocket chat client for the `type`-dialect backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The binary in `main.rs` wires three pieces together: a stdin line loop
//! that emits actions, the connection event loop in [`net::socket`] that owns
//! the (at most one) live websocket and the store, and a subscriber printing
//! state snapshots. Everything observable lives in the library so the loop
//! can be driven end to end from tests.

pub mod action;
pub mod input;
pub mod net;
pub mod state;
pub mod storage;
pub mod store;
