//! Networking for the websocket chat protocol.
//!
//! `socket` owns the connection lifecycle and frame dispatch; the wire
//! model lives in the shared `messages` crate.

pub mod socket;
