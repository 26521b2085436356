//! SSE HTTP handler for the web layer.
//!
//! This module contains only the Axum handler for the streaming endpoint.
//! Sessions, timers and message encoding live in the `sse` crate.

pub mod handler;
