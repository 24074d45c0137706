// SPDX-License-Identifier: MIT
//
// Palette — the 256 reference colors of the terminal-256 convention.
//
// Layout: 16 basic colors, the 6×6×6 color cube (channel steps 0x00,
// 0x5f, 0x87, 0xaf, 0xd7, 0xff), then the 24-step grayscale ramp. The
// index into the table IS the terminal color code, so the table order
// is load-bearing and must never change.
//
// The table is authoritative, not a formula: entries 241 and 242
// (#606060, #666666) sit off the usual 8 + 10·i grayscale ramp, so the
// ramp cannot be derived at build time.

use std::sync::OnceLock;

use crate::color::Color;

/// The 256 palette entries as hex literals, in terminal index order.
const TERM_256_HEX: [&str; 256] = [
    "#000000", "#800000", "#008000", "#808000", "#000080", "#800080", "#008080", "#c0c0c0",
    "#808080", "#ff0000", "#00ff00", "#ffff00", "#0000ff", "#ff00ff", "#00ffff", "#ffffff",
    "#000000", "#00005f", "#000087", "#0000af", "#0000d7", "#0000ff", "#005f00", "#005f5f",
    "#005f87", "#005faf", "#005fd7", "#005fff", "#008700", "#00875f", "#008787", "#0087af",
    "#0087d7", "#0087ff", "#00af00", "#00af5f", "#00af87", "#00afaf", "#00afd7", "#00afff",
    "#00d700", "#00d75f", "#00d787", "#00d7af", "#00d7d7", "#00d7ff", "#00ff00", "#00ff5f",
    "#00ff87", "#00ffaf", "#00ffd7", "#00ffff", "#5f0000", "#5f005f", "#5f0087", "#5f00af",
    "#5f00d7", "#5f00ff", "#5f5f00", "#5f5f5f", "#5f5f87", "#5f5faf", "#5f5fd7", "#5f5fff",
    "#5f8700", "#5f875f", "#5f8787", "#5f87af", "#5f87d7", "#5f87ff", "#5faf00", "#5faf5f",
    "#5faf87", "#5fafaf", "#5fafd7", "#5fafff", "#5fd700", "#5fd75f", "#5fd787", "#5fd7af",
    "#5fd7d7", "#5fd7ff", "#5fff00", "#5fff5f", "#5fff87", "#5fffaf", "#5fffd7", "#5fffff",
    "#870000", "#87005f", "#870087", "#8700af", "#8700d7", "#8700ff", "#875f00", "#875f5f",
    "#875f87", "#875faf", "#875fd7", "#875fff", "#878700", "#87875f", "#878787", "#8787af",
    "#8787d7", "#8787ff", "#87af00", "#87af5f", "#87af87", "#87afaf", "#87afd7", "#87afff",
    "#87d700", "#87d75f", "#87d787", "#87d7af", "#87d7d7", "#87d7ff", "#87ff00", "#87ff5f",
    "#87ff87", "#87ffaf", "#87ffd7", "#87ffff", "#af0000", "#af005f", "#af0087", "#af00af",
    "#af00d7", "#af00ff", "#af5f00", "#af5f5f", "#af5f87", "#af5faf", "#af5fd7", "#af5fff",
    "#af8700", "#af875f", "#af8787", "#af87af", "#af87d7", "#af87ff", "#afaf00", "#afaf5f",
    "#afaf87", "#afafaf", "#afafd7", "#afafff", "#afd700", "#afd75f", "#afd787", "#afd7af",
    "#afd7d7", "#afd7ff", "#afff00", "#afff5f", "#afff87", "#afffaf", "#afffd7", "#afffff",
    "#d70000", "#d7005f", "#d70087", "#d700af", "#d700d7", "#d700ff", "#d75f00", "#d75f5f",
    "#d75f87", "#d75faf", "#d75fd7", "#d75fff", "#d78700", "#d7875f", "#d78787", "#d787af",
    "#d787d7", "#d787ff", "#d7af00", "#d7af5f", "#d7af87", "#d7afaf", "#d7afd7", "#d7afff",
    "#d7d700", "#d7d75f", "#d7d787", "#d7d7af", "#d7d7d7", "#d7d7ff", "#d7ff00", "#d7ff5f",
    "#d7ff87", "#d7ffaf", "#d7ffd7", "#d7ffff", "#ff0000", "#ff005f", "#ff0087", "#ff00af",
    "#ff00d7", "#ff00ff", "#ff5f00", "#ff5f5f", "#ff5f87", "#ff5faf", "#ff5fd7", "#ff5fff",
    "#ff8700", "#ff875f", "#ff8787", "#ff87af", "#ff87d7", "#ff87ff", "#ffaf00", "#ffaf5f",
    "#ffaf87", "#ffafaf", "#ffafd7", "#ffafff", "#ffd700", "#ffd75f", "#ffd787", "#ffd7af",
    "#ffd7d7", "#ffd7ff", "#ffff00", "#ffff5f", "#ffff87", "#ffffaf", "#ffffd7", "#ffffff",
    "#080808", "#121212", "#1c1c1c", "#262626", "#303030", "#3a3a3a", "#444444", "#4e4e4e",
    "#585858", "#606060", "#666666", "#767676", "#808080", "#8a8a8a", "#949494", "#9e9e9e",
    "#a8a8a8", "#b2b2b2", "#bcbcbc", "#c6c6c6", "#d0d0d0", "#dadada", "#e4e4e4", "#eeeeee",
];

/// Build-once storage for [`Palette::global`].
static PALETTE: OnceLock<Palette> = OnceLock::new();

// ─── Palette ─────────────────────────────────────────────────────────────────

/// The fixed, ordered 256-color terminal palette.
///
/// Immutable after construction. The index of an entry is the terminal
/// color code emitted in `cterm*` highlight fields.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: [Color; 256],
}

impl Palette {
    /// Number of palette entries.
    pub const COUNT: usize = 256;

    /// Decode the hardcoded hex table into a palette.
    ///
    /// # Panics
    ///
    /// Panics if any table literal is malformed. That can only happen by
    /// editing the constant table — it is a programming defect, not a
    /// runtime condition, so it fails fast with the offending entry.
    #[must_use]
    pub fn build() -> Self {
        let mut colors = [Color::rgb(0, 0, 0); Self::COUNT];
        for (idx, hex) in TERM_256_HEX.iter().enumerate() {
            colors[idx] = Color::parse(hex).unwrap_or_else(|err| {
                panic!("palette entry {idx} ({hex:?}) is malformed: {err}")
            });
        }
        Self { colors }
    }

    /// The process-wide palette, built on first use.
    #[must_use]
    pub fn global() -> &'static Self {
        PALETTE.get_or_init(Self::build)
    }

    /// The color at a palette index.
    #[inline]
    #[must_use]
    pub const fn color(&self, idx: u8) -> Color {
        self.colors[idx as usize]
    }

    /// The palette index whose color is nearest to `target` under the
    /// sum-of-absolute-differences metric.
    ///
    /// Ties resolve to the lowest index: the scan runs 0→255 and only a
    /// strictly smaller distance displaces the current best. Entries
    /// duplicated between the basic-16 block and the cube/ramp therefore
    /// always resolve to their basic-16 index.
    ///
    /// Pure and total: any 24-bit input maps to an index in 0–255.
    #[must_use]
    pub fn nearest_index(&self, target: Color) -> u8 {
        let mut best_idx = 0u8;
        let mut best_dist = u32::MAX;

        for idx in 0u8..=255 {
            let dist = self.color(idx).distance(target);
            if dist < best_dist {
                best_dist = dist;
                best_idx = idx;
            }
        }

        best_idx
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Palette {
        Palette::build()
    }

    // ── Table shape ─────────────────────────────────────────────

    #[test]
    fn basic_block_endpoints() {
        let p = palette();
        assert_eq!(p.color(0), Color::rgb(0, 0, 0));
        assert_eq!(p.color(7), Color::rgb(0xc0, 0xc0, 0xc0));
        assert_eq!(p.color(15), Color::rgb(255, 255, 255));
    }

    #[test]
    fn cube_endpoints() {
        let p = palette();
        assert_eq!(p.color(16), Color::rgb(0, 0, 0));
        assert_eq!(p.color(196), Color::rgb(255, 0, 0));
        assert_eq!(p.color(231), Color::rgb(255, 255, 255));
    }

    #[test]
    fn grayscale_ramp_endpoints() {
        let p = palette();
        assert_eq!(p.color(232), Color::rgb(0x08, 0x08, 0x08));
        assert_eq!(p.color(255), Color::rgb(0xee, 0xee, 0xee));
    }

    #[test]
    fn grayscale_off_formula_entries() {
        // These two are NOT 8 + 10·i grays; the table is the contract.
        let p = palette();
        assert_eq!(p.color(241), Color::rgb(0x60, 0x60, 0x60));
        assert_eq!(p.color(242), Color::rgb(0x66, 0x66, 0x66));
    }

    #[test]
    fn global_is_built_once() {
        assert!(std::ptr::eq(Palette::global(), Palette::global()));
        assert_eq!(Palette::global().color(196), Color::rgb(255, 0, 0));
    }

    // ── Nearest index: exact matches ────────────────────────────

    #[test]
    fn every_entry_self_matches_at_lowest_index() {
        let p = palette();
        for idx in 0u8..=255 {
            let color = p.color(idx);
            let found = p.nearest_index(color);
            // Distance must be exactly zero...
            assert_eq!(p.color(found), color, "index {idx} matched a different color");
            // ...and the winner is the first occurrence of that color.
            let first = (0u8..=255).find(|&k| p.color(k) == color).unwrap();
            assert_eq!(found, first, "index {idx} did not resolve to the lowest duplicate");
        }
    }

    #[test]
    fn duplicated_entries_resolve_to_basic_block() {
        let p = palette();
        // Each of these colors appears again in the cube or ramp; the
        // basic-16 index must win.
        assert_eq!(p.nearest_index(Color::rgb(0, 0, 0)), 0); // also 16
        assert_eq!(p.nearest_index(Color::rgb(255, 0, 0)), 9); // also 196
        assert_eq!(p.nearest_index(Color::rgb(0, 255, 0)), 10); // also 46
        assert_eq!(p.nearest_index(Color::rgb(255, 255, 0)), 11); // also 226
        assert_eq!(p.nearest_index(Color::rgb(0, 0, 255)), 12); // also 21
        assert_eq!(p.nearest_index(Color::rgb(255, 0, 255)), 13); // also 201
        assert_eq!(p.nearest_index(Color::rgb(0, 255, 255)), 14); // also 51
        assert_eq!(p.nearest_index(Color::rgb(255, 255, 255)), 15); // also 231
        assert_eq!(p.nearest_index(Color::rgb(128, 128, 128)), 8); // also 244
    }

    // ── Nearest index: ties at nonzero distance ─────────────────

    #[test]
    fn tie_between_ramp_neighbors_takes_lower_index() {
        // (13,13,13) is 15 away from both #080808 (232) and #121212 (233).
        let p = palette();
        assert_eq!(p.nearest_index(Color::rgb(13, 13, 13)), 232);
    }

    #[test]
    fn tie_between_cube_neighbors_takes_lower_index() {
        // (0,0,195) is 20 away from both #0000af (19) and #0000d7 (20).
        let p = palette();
        assert_eq!(p.nearest_index(Color::rgb(0, 0, 195)), 19);
    }

    #[test]
    fn tie_spanning_basic_and_cube_takes_basic_index() {
        // (0,235,255) is 20 away from #00ffff (14 and 51) and from
        // #00d7ff (45); the basic-16 entry wins.
        let p = palette();
        assert_eq!(p.nearest_index(Color::rgb(0, 235, 255)), 14);
    }

    // ── Nearest index: arbitrary inputs ─────────────────────────

    #[test]
    fn near_misses_snap_to_neighbors() {
        let p = palette();
        // One step above a ramp gray.
        assert_eq!(p.nearest_index(Color::rgb(0x09, 0x08, 0x08)), 232);
        // Slightly warm dark gray, closest to #262626.
        assert_eq!(p.nearest_index(Color::rgb(0x28, 0x26, 0x24)), 235);
        // Almost-pure cube red.
        assert_eq!(p.nearest_index(Color::rgb(0xd8, 0x01, 0x00)), 160);
    }

    #[test]
    fn total_over_a_deterministic_sweep() {
        // A coarse sweep of the 24-bit space: the scan must stay in
        // bounds and return a genuinely nearest entry each time.
        let p = palette();
        for r in (0u16..=255).step_by(51) {
            for g in (0u16..=255).step_by(51) {
                for b in (0u16..=255).step_by(51) {
                    let target = Color::rgb(r as u8, g as u8, b as u8);
                    let found = p.color(p.nearest_index(target)).distance(target);
                    let best = (0u8..=255)
                        .map(|idx| p.color(idx).distance(target))
                        .min()
                        .unwrap();
                    assert_eq!(found, best);
                }
            }
        }
    }
}
