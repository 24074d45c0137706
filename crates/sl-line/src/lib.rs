//! # sl-line — statusline model for sl-nvim
//!
//! This crate contains everything between the color core and the plugin
//! protocol:
//!
//! - **[`editor`]** — the `Editor` trait, the seam to the host process
//! - **[`items`]** — statusline segments and their highlight color pairs
//! - **[`lint`]** — lint-engine queries and severity selection
//! - **[`statusline`]** — layout, startup commands, group switching, and
//!   template assembly
//!
//! Nothing here talks to a live editor directly; every side effect goes
//! through [`editor::Editor`], so the whole model is testable against a
//! scripted implementation.

pub mod editor;
pub mod items;
pub mod lint;
pub mod statusline;

pub use editor::{CallError, Editor, Value};
pub use items::{ColorPair, GroupColors, Item, SimpleItem};
pub use lint::{LintCounts, LintItem, LintStatus};
pub use statusline::{HighlightSetup, StatusLine};
