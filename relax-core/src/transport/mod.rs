//! Transport
//!
//! The wire between the Rust core and the browser page: a JSON frame
//! protocol and a WebSocket server that owns one `Session` per
//! connection.
//!
//! # Protocol
//!
//! Frames are JSON objects tagged by `type`. The client forwards form
//! input verbatim — fields arrive as raw strings and are validated by the
//! session, the same place the original page validated them:
//!
//! - inbound: `generate_graph`, `add_edge`, `step`, `reset`, `show_paths`
//! - outbound: `scene` (full display list), `status` (text readouts),
//!   `notice` (blocking user notice)
//!
//! # Serialization model
//!
//! Commands within one connection are handled one at a time by the task
//! that owns the socket, so session state transitions are strictly
//! serialized — there is nothing to lock.

mod protocol;
mod server;

pub use protocol::{ClientCommand, ServerEvent};
pub use server::{Server, ServerError, SessionId};
