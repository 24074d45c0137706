//! Statusline items and their highlight color pairs.
//!
//! Every segment on the line owns one or more highlight groups, and each
//! group exists in two variants: `_C` for the focused window and `_NC`
//! for the rest. All group names share the `StatusLine_` prefix so the
//! plugin never collides with user-defined groups.
//!
//! An [`Item`] is a closed sum of two shapes: a [`SimpleItem`] with a
//! fixed template and one group, and the lint item with four
//! severity-keyed groups and a runtime-computed value.

use sl_color::Color;

use crate::lint::LintItem;

/// Namespace prefix for every highlight group this plugin defines.
pub const PREFIX: &str = "StatusLine_";

/// Suffix of the group variant shown in the focused window.
pub const ACTIVE_SUFFIX: &str = "_C";

/// Suffix of the group variant shown in unfocused windows.
pub const INACTIVE_SUFFIX: &str = "_NC";

/// Background used when an item gives only a foreground (focused).
pub const BG_ACTIVE: Color = Color::rgb(0x22, 0x22, 0x22);

/// Background used when an item gives only a foreground (unfocused).
pub const BG_INACTIVE: Color = Color::rgb(0x11, 0x11, 0x11);

// ─── ColorPair ───────────────────────────────────────────────────────────────

/// A foreground/background pair for one window state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
}

impl ColorPair {
    /// An explicit foreground/background pair.
    #[must_use]
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }

    /// A foreground over the default focused background.
    #[must_use]
    pub const fn on_active(fg: Color) -> Self {
        Self::new(fg, BG_ACTIVE)
    }

    /// A foreground over the default unfocused background.
    #[must_use]
    pub const fn on_inactive(fg: Color) -> Self {
        Self::new(fg, BG_INACTIVE)
    }
}

// ─── GroupColors ─────────────────────────────────────────────────────────────

/// One highlight group an item needs, with both window-state variants.
///
/// `name` is the bare group name (no prefix, no suffix); the statusline
/// layer adds `StatusLine_` and `_C`/`_NC` when generating commands.
#[derive(Debug, Clone, Copy)]
pub struct GroupColors {
    /// Bare group name.
    pub name: &'static str,
    /// Colors when the window is focused.
    pub active: ColorPair,
    /// Colors when the window is not focused.
    pub inactive: ColorPair,
}

// ─── Items ───────────────────────────────────────────────────────────────────

/// A segment with a fixed display template and a single highlight group.
#[derive(Debug, Clone)]
pub struct SimpleItem {
    name: &'static str,
    template: &'static str,
    active: ColorPair,
    inactive: ColorPair,
}

impl SimpleItem {
    /// A simple item from two foregrounds; backgrounds default to
    /// [`BG_ACTIVE`] / [`BG_INACTIVE`].
    #[must_use]
    pub const fn new(
        name: &'static str,
        template: &'static str,
        active_fg: Color,
        inactive_fg: Color,
    ) -> Self {
        Self {
            name,
            template,
            active: ColorPair::on_active(active_fg),
            inactive: ColorPair::on_inactive(inactive_fg),
        }
    }

    /// A simple item with explicit color pairs for both states.
    #[must_use]
    pub const fn with_pairs(
        name: &'static str,
        template: &'static str,
        active: ColorPair,
        inactive: ColorPair,
    ) -> Self {
        Self {
            name,
            template,
            active,
            inactive,
        }
    }
}

/// One statusline segment.
///
/// A closed two-variant sum: either a fixed-template [`SimpleItem`] or
/// the lint item, whose value is computed per redraw. Both variants
/// answer the same two questions — which highlight groups do you need
/// defined at startup, and which (group, template) pair do you occupy on
/// the line.
#[derive(Debug, Clone)]
pub enum Item {
    /// Fixed template, one highlight group.
    Simple(SimpleItem),
    /// Lint status, four severity-keyed highlight groups.
    Lint(LintItem),
}

impl Item {
    /// The highlight groups to pre-generate at startup.
    #[must_use]
    pub fn highlight_groups(&self) -> Vec<GroupColors> {
        match self {
            Self::Simple(item) => vec![GroupColors {
                name: item.name,
                active: item.active,
                inactive: item.inactive,
            }],
            Self::Lint(item) => item.highlight_groups().to_vec(),
        }
    }

    /// The (group name, display template) pair used on the line.
    #[must_use]
    pub const fn display(&self) -> (&'static str, &'static str) {
        match self {
            Self::Simple(item) => (item.name, item.template),
            Self::Lint(item) => item.display(),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
