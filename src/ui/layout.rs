// vai - a vim-modal terminal chat client for AI conversations
// Copyright (C) 2026  vai contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

pub const TITLE_BAR_HEIGHT: i32 = 1;
pub const INPUT_AREA_HEIGHT: i32 = 5;
/// Vertical allowance for pane frames and spacing between panes.
pub const PANE_INNER_PADDING: i32 = 5;

/// Position and size of a single pane. Origin is the top-left corner.
///
/// Width and height are signed: for degenerate terminal sizes the layout
/// math goes negative, which signals "too small to render". Consumers must
/// go through [`PaneRect::clamped_width`] / [`PaneRect::clamped_height`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaneRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PaneRect {
    #[must_use]
    pub fn clamped_width(&self) -> u16 {
        u16::try_from(self.width).unwrap_or(0)
    }

    #[must_use]
    pub fn clamped_height(&self) -> u16 {
        u16::try_from(self.height).unwrap_or(0)
    }

    /// Width inside a one-cell border on each side, clamped to zero.
    #[must_use]
    pub fn inner_width(&self) -> usize {
        usize::try_from(self.width - 2).unwrap_or(0)
    }

    /// Height inside a one-cell border on each side, clamped to zero.
    #[must_use]
    pub fn inner_height(&self) -> usize {
        usize::try_from(self.height - 2).unwrap_or(0)
    }
}

/// Computed pane geometry for the whole screen.
/// Recomputed from scratch on every resize, never patched incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    pub width: i32,
    pub height: i32,
    pub title_bar: PaneRect,
    pub session_list: PaneRect,
    pub chat_buffer: PaneRect,
    pub input_area: PaneRect,
}

/// Compute the pane layout for a terminal of the given size.
///
/// Pure function of its inputs; never fails. No bounds are enforced here:
/// negative widths/heights are valid outputs for terminals too small to
/// render and are clamped by consumers.
pub fn compute(width: i32, height: i32) -> ScreenLayout {
    // Session list: 20% of the width, at least 20 columns. On terminals too
    // narrow for that minimum plus a usable chat pane, fall back to a third.
    let mut session_width = (width * 20 / 100).max(20);
    if session_width > width - 40 {
        session_width = width / 3;
    }

    let chat_width = width - session_width;
    let content_height = height - TITLE_BAR_HEIGHT - INPUT_AREA_HEIGHT - PANE_INNER_PADDING;

    ScreenLayout {
        width,
        height,
        title_bar: PaneRect { x: 0, y: 0, width, height: TITLE_BAR_HEIGHT },
        session_list: PaneRect {
            x: 0,
            y: TITLE_BAR_HEIGHT,
            width: session_width,
            height: content_height,
        },
        chat_buffer: PaneRect {
            x: session_width,
            y: TITLE_BAR_HEIGHT,
            width: chat_width,
            height: content_height,
        },
        input_area: PaneRect {
            x: 0,
            y: TITLE_BAR_HEIGHT + content_height,
            width,
            height: INPUT_AREA_HEIGHT,
        },
    }
}

#[cfg(test)]
mod tests {
    // =====
    // TESTS: 14
    // =====

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn standard_terminal() {
        let layout = compute(100, 40);
        assert_eq!(layout.title_bar.height, 1);
        assert_eq!(layout.input_area.height, 5);
        assert_eq!(layout.session_list.width, 20);
        assert_eq!(layout.chat_buffer.width, 80);
        assert_eq!(layout.session_list.height, 29);
        assert_eq!(layout.chat_buffer.height, 29);
    }

    #[test]
    fn panes_span_full_width() {
        for w in [0, 1, 10, 40, 59, 60, 80, 100, 250, 500] {
            let layout = compute(w, 40);
            assert_eq!(
                layout.session_list.width + layout.chat_buffer.width,
                w,
                "width split mismatch at {w}"
            );
            assert_eq!(layout.title_bar.width, w);
            assert_eq!(layout.input_area.width, w);
        }
    }

    #[test]
    fn session_list_minimum_width() {
        // 20% of 80 is 16, floored at 20; 20 <= 80-40 so no narrow fallback
        let layout = compute(80, 24);
        assert_eq!(layout.session_list.width, 20);
    }

    #[test]
    fn session_list_scales_on_wide_terminals() {
        let layout = compute(300, 50);
        assert_eq!(layout.session_list.width, 60);
        assert_eq!(layout.chat_buffer.width, 240);
    }

    #[test]
    fn narrow_terminal_falls_back_to_a_third() {
        // min width 20 > 50-40, so the list drops to width/3
        let layout = compute(50, 24);
        assert_eq!(layout.session_list.width, 16);
        assert_eq!(layout.chat_buffer.width, 34);
    }

    #[test]
    fn fallback_boundary_at_width_60() {
        // 60-40 == 20: the minimum still fits, no fallback
        let layout = compute(60, 24);
        assert_eq!(layout.session_list.width, 20);
        let layout = compute(59, 24);
        assert_eq!(layout.session_list.width, 19);
    }

    #[test]
    fn panes_are_positioned_left_to_right() {
        let layout = compute(120, 40);
        assert_eq!(layout.session_list.x, 0);
        assert_eq!(layout.chat_buffer.x, layout.session_list.width);
        assert_eq!(layout.session_list.y, layout.chat_buffer.y);
    }

    #[test]
    fn input_area_sits_below_content() {
        let layout = compute(100, 40);
        assert_eq!(layout.input_area.y, layout.session_list.y + layout.session_list.height);
        assert_eq!(layout.input_area.x, 0);
    }

    #[test]
    fn content_height_subtracts_fixed_rows() {
        for h in [0, 5, 11, 12, 24, 100] {
            let layout = compute(100, h);
            assert_eq!(layout.session_list.height, h - 11, "content height at h={h}");
        }
    }

    #[test]
    fn degenerate_height_goes_negative() {
        let layout = compute(100, 5);
        assert_eq!(layout.session_list.height, -6);
        assert_eq!(layout.session_list.clamped_height(), 0);
    }

    #[test]
    fn zero_size_terminal() {
        let layout = compute(0, 0);
        assert_eq!(layout.session_list.width, 0);
        assert_eq!(layout.chat_buffer.width, 0);
        assert_eq!(layout.title_bar.clamped_width(), 0);
        assert_eq!(layout.chat_buffer.clamped_height(), 0);
    }

    #[test]
    fn clamped_accessors_pass_through_positive_values() {
        let rect = PaneRect { x: 0, y: 0, width: 42, height: 7 };
        assert_eq!(rect.clamped_width(), 42);
        assert_eq!(rect.clamped_height(), 7);
    }

    #[test]
    fn inner_size_subtracts_frame() {
        let rect = PaneRect { x: 0, y: 0, width: 42, height: 7 };
        assert_eq!(rect.inner_width(), 40);
        assert_eq!(rect.inner_height(), 5);
        let tiny = PaneRect { x: 0, y: 0, width: 1, height: 2 };
        assert_eq!(tiny.inner_width(), 0);
        assert_eq!(tiny.inner_height(), 0);
    }

    #[test]
    fn recompute_is_deterministic() {
        assert_eq!(compute(123, 45), compute(123, 45));
    }
}
