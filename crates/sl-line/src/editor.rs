//! The editor seam.
//!
//! Everything the plugin ever asks of the host process fits in three
//! calls: execute an ex command, invoke a named function, and read the
//! current buffer number. The trait keeps the rest of the crate free of
//! transport details — production code binds it to the host's RPC
//! channel, tests bind it to a scripted fake.
//!
//! Function replies are dynamically typed on the wire (integers, strings,
//! string-keyed mappings), so the reply type is [`serde_json::Value`].

use thiserror::Error;

pub use serde_json::Value;

/// Why a function invocation produced no usable reply.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CallError {
    /// The named function is not defined in the editor.
    #[error("unknown editor function: {0}")]
    UnknownFunction(String),

    /// The function exists but raised internally.
    #[error("editor function {name} failed: {message}")]
    Failed {
        /// The function that was invoked.
        name: String,
        /// The host's error text.
        message: String,
    },

    /// The reply arrived but did not have the expected shape.
    #[error("unexpected reply from {name}: {reply}")]
    BadReply {
        /// The function that was invoked.
        name: String,
        /// The reply as received.
        reply: Value,
    },
}

/// The host editor, seen through the three calls the plugin needs.
pub trait Editor {
    /// Execute an ex command. Fire-and-forget: there is no structured
    /// return value, and a malformed command surfaces only on the host's
    /// own error channel.
    fn command(&mut self, cmd: &str);

    /// Invoke a named editor function with arguments.
    ///
    /// # Errors
    ///
    /// Returns a [`CallError`] if the function is undefined or raises
    /// internally.
    fn call_function(&mut self, name: &str, args: Vec<Value>) -> Result<Value, CallError>;

    /// The number of the buffer currently being drawn.
    fn current_buf(&mut self) -> u64;
}

// ─── Tests ───────────────────────────────────────────────────────────────────
