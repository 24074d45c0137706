// SPDX-License-Identifier: MIT
//
// Highlight command generation.
//
// The editor defines a highlight group's look with a single `highlight`
// command carrying paired fields: `cterm*` for indexed-color terminals
// and `gui*` for true-color ones. Both sides come from the same input —
// the palette index from quantization, the hex form verbatim — so one
// command keeps both worlds visually in sync.
//
// Field order is fixed (foreground, background, attributes) and omitted
// facets contribute no fields at all. Downstream tests pin the exact
// strings; treat the output format as frozen.

use std::fmt;
use std::fmt::Write as _;

use crate::color::Color;
use crate::palette::Palette;

// ─── Attr ────────────────────────────────────────────────────────────────────

bitflags::bitflags! {
    /// Text attributes for a highlight group.
    ///
    /// These render as the comma-joined token list the editor expects in
    /// `cterm=` and `gui=` fields. The empty set renders as the literal
    /// token `none`, which the editor treats as "clear all attributes" —
    /// distinct from omitting the field entirely.
    ///
    /// ```
    /// use sl_color::Attr;
    ///
    /// assert_eq!(Attr::BOLD.to_string(), "bold");
    /// assert_eq!((Attr::BOLD | Attr::UNDERLINE).to_string(), "bold,underline");
    /// assert_eq!(Attr::empty().to_string(), "none");
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Attr: u8 {
        /// `bold`
        const BOLD = 1 << 0;
        /// `underline`
        const UNDERLINE = 1 << 1;
        /// `reverse`
        const REVERSE = 1 << 2;
        /// `italic`
        const ITALIC = 1 << 3;
    }
}

/// Flag-to-token table, in render order.
const ATTR_TOKENS: [(Attr, &str); 4] = [
    (Attr::BOLD, "bold"),
    (Attr::UNDERLINE, "underline"),
    (Attr::REVERSE, "reverse"),
    (Attr::ITALIC, "italic"),
];

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        for (flag, token) in ATTR_TOKENS {
            if self.contains(flag) {
                if !first {
                    f.write_str(",")?;
                }
                f.write_str(token)?;
                first = false;
            }
        }
        Ok(())
    }
}

// ─── HighlightSpec ───────────────────────────────────────────────────────────

/// A highlight group definition about to become a command string.
///
/// Up to three optional facets: foreground color, background color, and
/// text attributes. Constructed transiently, consumed by
/// [`to_command`](Self::to_command):
///
/// ```
/// use sl_color::{Attr, Color, HighlightSpec, Palette};
///
/// let cmd = HighlightSpec::new("StatusLine")
///     .bg(Color::rgb(0x22, 0x22, 0x22))
///     .attr(Attr::empty())
///     .to_command(Palette::global());
/// assert_eq!(cmd, "highlight StatusLine ctermbg=235 guibg=#222222 cterm=none gui=none");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HighlightSpec<'a> {
    name: &'a str,
    fg: Option<Color>,
    bg: Option<Color>,
    attr: Option<Attr>,
}

impl<'a> HighlightSpec<'a> {
    /// A spec with no facets — renders as a bare `highlight <name>`.
    #[must_use]
    pub const fn new(name: &'a str) -> Self {
        Self {
            name,
            fg: None,
            bg: None,
            attr: None,
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Set the text attributes. `Attr::empty()` emits the explicit
    /// `none` token; not calling this omits the attribute fields.
    #[must_use]
    pub const fn attr(mut self, attr: Attr) -> Self {
        self.attr = Some(attr);
        self
    }

    /// Render the define command.
    ///
    /// Each color facet contributes an indexed field (via the palette's
    /// nearest index) and a true-color field (the lowercase hex form).
    /// One line, no trailing whitespace.
    #[must_use]
    pub fn to_command(&self, palette: &Palette) -> String {
        let mut cmd = format!("highlight {}", self.name);
        if let Some(fg) = self.fg {
            let _ = write!(cmd, " ctermfg={} guifg={fg}", palette.nearest_index(fg));
        }
        if let Some(bg) = self.bg {
            let _ = write!(cmd, " ctermbg={} guibg={bg}", palette.nearest_index(bg));
        }
        if let Some(attr) = self.attr {
            let _ = write!(cmd, " cterm={attr} gui={attr}");
        }
        cmd
    }
}

/// Render the alias command that makes `from` render exactly like `to`,
/// overriding any prior definition of `from`.
#[must_use]
pub fn link_command(from: &str, to: &str) -> String {
    format!("highlight! link {from} {to}")
}

// ─── Tests ───────────────────────────────────────────────────────────────────
