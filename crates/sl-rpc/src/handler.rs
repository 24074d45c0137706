//! Handler registry and dispatch.
//!
//! The plugin registers one handler per host-visible entry point —
//! functions and commands answer requests, autocmds consume
//! notifications. The [`Registry`] routes parsed [`Request`]s to them
//! and serializes the whole set for the host's `specs` discovery call.
//!
//! Argument shape: the host wraps an invocation's arguments in a
//! one-element array, so dispatch unwraps that layer before handlers see
//! them. A payload without the wrapper is a dispatch error, not a panic.

use std::collections::HashMap;

use log::{debug, warn};
use serde_json::{Value, json};
use thiserror::Error;

use sl_line::{CallError, Editor};

use crate::request::Request;

// ─── DispatchError ───────────────────────────────────────────────────────────

/// Why a request could not be answered.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    /// The method name fit no known request shape.
    #[error("unknown method: {0}")]
    UnknownMethod(String),

    /// No function handler is registered under this name.
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    /// No command handler is registered under this name.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The argument payload lacked the one-element array wrapper.
    #[error("bad argument payload for {0}")]
    BadArguments(String),

    /// A handler's editor call failed.
    #[error(transparent)]
    Call(#[from] CallError),
}

// ─── Handler traits ──────────────────────────────────────────────────────────

/// A host-callable function.
pub trait FunctionHandler {
    /// The function name the host registers and calls.
    fn name(&self) -> &str;

    /// Whether the host must wait for the reply.
    fn is_sync(&self) -> bool;

    /// Answer one invocation.
    ///
    /// # Errors
    ///
    /// Returns a [`DispatchError`] when the invocation cannot produce a
    /// reply; the host surfaces it on its own error channel.
    fn handle(&mut self, editor: &mut dyn Editor, args: &[Value]) -> Result<Value, DispatchError>;
}

/// A host-callable command.
pub trait CommandHandler {
    /// The command name.
    fn name(&self) -> &str;

    /// Whether the host must wait for the reply.
    fn is_sync(&self) -> bool;

    /// Answer one invocation.
    ///
    /// # Errors
    ///
    /// Returns a [`DispatchError`] when the invocation cannot produce a
    /// reply.
    fn handle(&mut self, editor: &mut dyn Editor, args: &[Value]) -> Result<Value, DispatchError>;
}

/// An autocmd subscriber. Autocmds arrive as notifications — there is
/// no reply and no error channel, so `handle` returns nothing.
pub trait AutocmdHandler {
    /// Event name(s), comma-joined (e.g. `VimEnter,ColorScheme`).
    fn event(&self) -> &str;

    /// The autocmd pattern (e.g. `*`).
    fn pattern(&self) -> &str;

    /// Consume one notification.
    fn handle(&mut self, editor: &mut dyn Editor, args: &[Value]);
}

// ─── Spec serialization ──────────────────────────────────────────────────────

// TODO: carry handler options (nargs, group, nested, ...) into the specs
// once a handler needs one.

fn function_spec(handler: &dyn FunctionHandler) -> Value {
    json!({
        "sync": handler.is_sync(),
        "name": handler.name(),
        "type": "function",
        "opts": {},
    })
}

fn command_spec(handler: &dyn CommandHandler) -> Value {
    json!({
        "sync": handler.is_sync(),
        "name": handler.name(),
        "type": "command",
        "opts": {},
    })
}

fn autocmd_spec(handler: &dyn AutocmdHandler) -> Value {
    json!({
        "sync": false,
        "name": handler.event(),
        "type": "autocmd",
        "opts": { "pattern": handler.pattern() },
    })
}

// ─── Registry ────────────────────────────────────────────────────────────────

/// All registered handlers, routed by parsed request.
#[derive(Default)]
pub struct Registry {
    functions: HashMap<String, Box<dyn FunctionHandler>>,
    commands: HashMap<String, Box<dyn CommandHandler>>,
    autocmds: HashMap<(String, String), Box<dyn AutocmdHandler>>,
}

impl Registry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function handler under its own name.
    pub fn register_function(&mut self, handler: Box<dyn FunctionHandler>) {
        let name = handler.name().to_string();
        self.functions.insert(name, handler);
    }

    /// Register a command handler under its own name.
    pub fn register_command(&mut self, handler: Box<dyn CommandHandler>) {
        let name = handler.name().to_string();
        self.commands.insert(name, handler);
    }

    /// Register an autocmd handler under its event/pattern pair.
    pub fn register_autocmd(&mut self, handler: Box<dyn AutocmdHandler>) {
        let key = (handler.event().to_string(), handler.pattern().to_string());
        self.autocmds.insert(key, handler);
    }

    /// Serialize every registered handler for the host's `specs` call.
    ///
    /// Sorted by name so the output is stable across runs.
    #[must_use]
    pub fn specs(&self) -> Value {
        let mut specs: Vec<Value> = Vec::new();
        specs.extend(self.functions.values().map(|h| function_spec(h.as_ref())));
        specs.extend(self.commands.values().map(|h| command_spec(h.as_ref())));
        specs.extend(self.autocmds.values().map(|h| autocmd_spec(h.as_ref())));
        specs.sort_by(|a, b| {
            let name = |v: &Value| v.get("name").and_then(Value::as_str).map(str::to_string);
            name(a).cmp(&name(b))
        });
        Value::Array(specs)
    }

    /// Answer a request (a call the host waits on).
    ///
    /// # Errors
    ///
    /// Returns a [`DispatchError`] for unknown methods and names, a
    /// malformed argument payload, or a failing handler.
    pub fn handle_request(
        &mut self,
        editor: &mut dyn Editor,
        method: &str,
        args: &[Value],
    ) -> Result<Value, DispatchError> {
        debug!("request {method}: {args:?}");
        match Request::from(method) {
            Request::Poll => Ok(Value::from("ok")),
            Request::Specs => Ok(self.specs()),
            Request::Function(name) => {
                let args = unwrap_args(method, args)?;
                match self.functions.get_mut(name) {
                    Some(handler) => handler.handle(editor, args),
                    None => Err(DispatchError::UnknownFunction(name.to_string())),
                }
            }
            Request::Command(name) => {
                let args = unwrap_args(method, args)?;
                match self.commands.get_mut(name) {
                    Some(handler) => handler.handle(editor, args),
                    None => Err(DispatchError::UnknownCommand(name.to_string())),
                }
            }
            Request::Autocmd { .. } | Request::Unknown(_) => {
                // Autocmds arrive as notifications, never as requests.
                warn!("unroutable request: {method}");
                Err(DispatchError::UnknownMethod(method.to_string()))
            }
        }
    }

    /// Consume a notification (no reply channel). Problems are logged
    /// and dropped.
    pub fn handle_notification(&mut self, editor: &mut dyn Editor, method: &str, args: &[Value]) {
        debug!("notification {method}");
        match Request::from(method) {
            Request::Autocmd { event, pattern } => {
                let Ok(args) = unwrap_args(method, args) else {
                    warn!("bad autocmd payload: {method}");
                    return;
                };
                match self
                    .autocmds
                    .get_mut(&(event.to_string(), pattern.to_string()))
                {
                    Some(handler) => handler.handle(editor, args),
                    None => warn!("unknown autocmd: {event} {pattern}"),
                }
            }
            _ => warn!("unknown notification: {method}"),
        }
    }
}

/// Strip the one-element array wrapper around an invocation's arguments.
fn unwrap_args<'a>(method: &str, args: &'a [Value]) -> Result<&'a [Value], DispatchError> {
    args.first()
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| DispatchError::BadArguments(method.to_string()))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
