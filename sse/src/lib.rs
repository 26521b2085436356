//! Server-Sent Events (SSE) infrastructure for the random number stream.
//!
//! # Architecture
//!
//! - **One session per connection**: every request to the streaming endpoint
//!   opens a `Session` that owns its own recurring timer and random number
//!   generator. Nothing is shared between sessions.
//! - **Scoped timers**: the session lives inside the response stream. When the
//!   HTTP server drops the stream (peer closed, write failed) the session and its
//!   timer are dropped and the session unregisters itself.
//! - **Shutdown signal**: the `Manager` holds a `watch` channel observed by every
//!   session so that open streams end when the server shuts down.
//!
//! # Message Flow
//!
//! 1. Client requests `/random`
//! 2. Handler calls `Manager::open_session()`, which registers the session
//! 3. Every tick the session draws a value in `0..=99` and yields
//!    `data: {"random":N}\n\n`
//! 4. On disconnect or shutdown the stream ends and the session is removed
//!
//! # Modules
//!
//! - `connection`: SessionRegistry and type-safe SessionId
//! - `manager`: Opens sessions and broadcasts shutdown
//! - `message`: The `RandomNumber` payload and its SSE encoding
//! - `session`: Per-connection timer and event stream

pub mod connection;
pub mod manager;
pub mod message;
pub mod session;

pub use manager::Manager;
pub use session::Session;
