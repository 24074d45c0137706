//! Statusline layout and command generation.
//!
//! A [`StatusLine`] is an ordered pair of item lists — left of the
//! elastic gap and right of it. From that one description come the three
//! things the host needs:
//!
//! 1. startup `highlight` commands defining every group's `_C` and `_NC`
//!    variants (issued on `VimEnter` and again on every `ColorScheme`),
//! 2. link commands flipping all groups between the two variants when
//!    window focus changes,
//! 3. the statusline template string itself.
//!
//! The template embeds a `SetHighlightGroups(<buf>)` placeholder so the
//! host calls back into the plugin whenever it redraws a window, and the
//! lint segment's `GetLintStatus()` placeholder does the same per draw.

use std::fmt::Write as _;

use sl_color::{Attr, Color, HighlightSpec, Palette, link_command};

use crate::editor::Editor;
use crate::items::{
    ACTIVE_SUFFIX, BG_ACTIVE, BG_INACTIVE, INACTIVE_SUFFIX, Item, PREFIX, SimpleItem,
};
use crate::lint::LintItem;

// ─── HighlightSetup ──────────────────────────────────────────────────────────

/// Everything computed once at startup: the define commands to issue and
/// the bare group names that focus switching will re-link later.
#[derive(Debug, Clone)]
pub struct HighlightSetup {
    /// Define commands, in item order, base groups last.
    pub commands: Vec<String>,
    /// Bare group names (no prefix, no suffix), in item order.
    pub groups: Vec<&'static str>,
}

// ─── StatusLine ──────────────────────────────────────────────────────────────

/// The full statusline: items left and right of the elastic gap.
#[derive(Debug, Clone)]
pub struct StatusLine {
    left: Vec<Item>,
    right: Vec<Item>,
}

impl StatusLine {
    /// A statusline from explicit item lists.
    #[must_use]
    pub const fn new(left: Vec<Item>, right: Vec<Item>) -> Self {
        Self { left, right }
    }

    /// The stock layout: lint status on the left; filename, file
    /// format/encoding, cursor position, and scroll percentage on the
    /// right.
    #[must_use]
    pub fn default_layout() -> Self {
        Self::new(
            vec![Item::Lint(LintItem::new())],
            vec![
                Item::Simple(SimpleItem::new(
                    "FN",
                    "%F ",
                    Color::rgb(0x72, 0x9f, 0xcf),
                    Color::rgb(0xa9, 0xa9, 0xa9),
                )),
                Item::Simple(SimpleItem::new(
                    "FF",
                    "[%{&encoding}/%{&fileformat}/%Y] ",
                    Color::rgb(0xef, 0x29, 0x29),
                    Color::rgb(0xaf, 0x00, 0x00),
                )),
                Item::Simple(SimpleItem::new(
                    "LC",
                    "%l,%c ",
                    Color::rgb(0xfc, 0xe9, 0x4f),
                    Color::rgb(0x87, 0x87, 0x00),
                )),
                Item::Simple(SimpleItem::new(
                    "PS",
                    "%4P ",
                    Color::rgb(0x8a, 0xe2, 0x34),
                    Color::rgb(0x5f, 0xaf, 0x00),
                )),
            ],
        )
    }

    /// All items, left side first.
    fn items(&self) -> impl Iterator<Item = &Item> {
        self.left.iter().chain(self.right.iter())
    }

    /// Generate the startup highlight commands and the switchable group
    /// list.
    ///
    /// Every item group gets two defines — `StatusLine_<name>_C` with
    /// its active colors and `StatusLine_<name>_NC` with its inactive
    /// colors — followed by the base `StatusLine`/`StatusLineNC` groups
    /// (background only, attributes cleared).
    #[must_use]
    pub fn highlight_setup(&self, palette: &Palette) -> HighlightSetup {
        let mut commands = Vec::new();
        let mut groups = Vec::new();

        for item in self.items() {
            for group in item.highlight_groups() {
                let active = format!("{PREFIX}{}{ACTIVE_SUFFIX}", group.name);
                commands.push(
                    HighlightSpec::new(&active)
                        .fg(group.active.fg)
                        .bg(group.active.bg)
                        .to_command(palette),
                );
                let inactive = format!("{PREFIX}{}{INACTIVE_SUFFIX}", group.name);
                commands.push(
                    HighlightSpec::new(&inactive)
                        .fg(group.inactive.fg)
                        .bg(group.inactive.bg)
                        .to_command(palette),
                );
                groups.push(group.name);
            }
        }

        commands.push(
            HighlightSpec::new("StatusLine")
                .bg(BG_ACTIVE)
                .attr(Attr::empty())
                .to_command(palette),
        );
        commands.push(
            HighlightSpec::new("StatusLineNC")
                .bg(BG_INACTIVE)
                .attr(Attr::empty())
                .to_command(palette),
        );

        HighlightSetup { commands, groups }
    }

    /// The link commands that flip every group to its `_C` (focused) or
    /// `_NC` (unfocused) variant.
    #[must_use]
    pub fn switch_commands(&self, focused: bool) -> Vec<String> {
        let suffix = if focused {
            ACTIVE_SUFFIX
        } else {
            INACTIVE_SUFFIX
        };
        self.items()
            .flat_map(|item| item.highlight_groups())
            .map(|group| {
                link_command(
                    &format!("{PREFIX}{}", group.name),
                    &format!("{PREFIX}{}{suffix}", group.name),
                )
            })
            .collect()
    }

    /// Flip every group according to whether the window drawing itself
    /// (`active`) is the one currently focused.
    pub fn switch_groups(&self, editor: &mut dyn Editor, active: u64) {
        let focused = editor.current_buf() == active;
        for cmd in self.switch_commands(focused) {
            editor.command(&cmd);
        }
    }

    /// Assemble the statusline template for a window on buffer
    /// `active_buf`.
    #[must_use]
    pub fn template(&self, active_buf: u64) -> String {
        let mut line = format!("%{{SetHighlightGroups({active_buf})}}");
        for item in &self.left {
            let (group, template) = item.display();
            let _ = write!(line, "%#{PREFIX}{group}#{template}");
        }
        line.push_str("%*");
        line.push_str("%=%<");
        for item in &self.right {
            let (group, template) = item.display();
            let _ = write!(line, "%#{PREFIX}{group}#{template}");
        }
        line.push_str("%*");
        line
    }

    /// The template for whatever buffer the editor is drawing now.
    pub fn build(&self, editor: &mut dyn Editor) -> String {
        let buf = editor.current_buf();
        self.template(buf)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
