// SPDX-License-Identifier: MIT
//
// sl-color — color quantization and highlight command generation.
//
// The editor speaks two color dialects at once: true-color `gui*` fields
// for modern terminals and indexed `cterm*` fields for everything else.
// This crate owns the bridge between them — an RGB triple parsed from a
// hex literal, the fixed 256-entry terminal palette, the nearest-index
// search that maps one onto the other, and the `highlight` command
// strings that carry both to the editor.

pub mod color;
pub mod highlight;
pub mod palette;

pub use color::{Color, ParseColorError};
pub use highlight::{Attr, HighlightSpec, link_command};
pub use palette::Palette;
