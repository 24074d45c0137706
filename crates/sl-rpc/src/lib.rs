//! # sl-rpc — the plugin protocol for sl-nvim
//!
//! The host addresses a remote plugin with method names like
//! `/path/to/plugin:function:BuildStatusLine`. This crate owns the
//! protocol layer above the transport: parsing those method names
//! ([`request`]), and routing them to registered handlers
//! ([`handler`]) — including the `poll` liveness probe and the `specs`
//! request the host uses to discover what the plugin provides.
//!
//! The transport itself (the msgpack channel the host speaks) is the
//! host's business; everything here works against
//! [`sl_line::Editor`] and plain [`serde_json::Value`]s.

pub mod handler;
pub mod request;

pub use handler::{
    AutocmdHandler, CommandHandler, DispatchError, FunctionHandler, Registry,
};
pub use request::Request;
