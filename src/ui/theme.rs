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

use crate::app::Mode;
use ratatui::style::{Color, Modifier, Style};

// Default palette (256-color)
pub const NORMAL_MODE: Color = Color::Indexed(252); // white
pub const INSERT_MODE: Color = Color::Indexed(142); // green
pub const VISUAL_MODE: Color = Color::Indexed(33); // blue
pub const UNFOCUSED_NORMAL: Color = Color::Indexed(240); // gray
pub const FOCUSED: Color = Color::Indexed(151); // cyan
pub const USER_BORDER: Color = Color::Indexed(142);
pub const ASSISTANT_BORDER: Color = Color::Indexed(33);
pub const INFO: Color = Color::Indexed(86);
pub const ERROR: Color = Color::Indexed(196);
pub const DIM: Color = Color::DarkGray;
pub const TITLE_FG: Color = Color::Indexed(252);
pub const TITLE_BG: Color = Color::Indexed(235);

/// Box-drawing characters for a pane border.
pub struct BorderSet {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

pub const NORMAL_BORDER: BorderSet = BorderSet {
    top_left: '\u{250C}',     // ┌
    top_right: '\u{2510}',    // ┐
    bottom_left: '\u{2514}',  // └
    bottom_right: '\u{2518}', // ┘
    horizontal: '\u{2500}',   // ─
    vertical: '\u{2502}',     // │
};

pub const THICK_BORDER: BorderSet = BorderSet {
    top_left: '\u{250F}',     // ┏
    top_right: '\u{2513}',    // ┓
    bottom_left: '\u{2517}',  // ┗
    bottom_right: '\u{251B}', // ┛
    horizontal: '\u{2501}',   // ━
    vertical: '\u{2503}',     // ┃
};

/// A named color palette, selected once at startup from
/// `ThemeConfig.name`. All style decisions route through its methods so
/// no render site hardcodes a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub insert_mode: Color,
    pub visual_mode: Color,
    pub unfocused: Color,
    pub focused: Color,
    pub user_border: Color,
    pub assistant_border: Color,
    pub info: Color,
    pub dim: Color,
    pub title_fg: Color,
    pub title_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    insert_mode: INSERT_MODE,
    visual_mode: VISUAL_MODE,
    unfocused: UNFOCUSED_NORMAL,
    focused: FOCUSED,
    user_border: USER_BORDER,
    assistant_border: ASSISTANT_BORDER,
    info: INFO,
    dim: DIM,
    title_fg: TITLE_FG,
    title_bg: TITLE_BG,
};

/// Grayscale palette for terminals where color carries no meaning.
pub const MONO_THEME: Theme = Theme {
    insert_mode: Color::Indexed(250),
    visual_mode: Color::Indexed(245),
    unfocused: Color::Indexed(240),
    focused: Color::Indexed(255),
    user_border: Color::Indexed(250),
    assistant_border: Color::Indexed(245),
    info: Color::Indexed(252),
    dim: Color::Indexed(240),
    title_fg: Color::Indexed(255),
    title_bg: Color::Indexed(236),
};

impl Default for Theme {
    fn default() -> Self {
        DEFAULT_THEME
    }
}

impl Theme {
    /// Unknown names fall back to the default palette.
    #[must_use]
    pub fn by_name(name: &str) -> Self {
        match name {
            "mono" => MONO_THEME,
            _ => DEFAULT_THEME,
        }
    }

    /// Border color for an unfocused pane, keyed by the current mode.
    #[must_use]
    pub fn mode_border_color(&self, mode: Mode) -> Color {
        match mode {
            Mode::Normal => self.unfocused,
            Mode::Insert => self.insert_mode,
            Mode::Visual => self.visual_mode,
        }
    }

    /// Border style + character set for a pane.
    /// Focused panes get a thick accent border regardless of mode;
    /// unfocused panes get a normal border in the mode color.
    #[must_use]
    pub fn pane_border(&self, focused: bool, mode: Mode) -> (Style, &'static BorderSet) {
        if focused {
            (Style::default().fg(self.focused), &THICK_BORDER)
        } else {
            (Style::default().fg(self.mode_border_color(mode)), &NORMAL_BORDER)
        }
    }

    #[must_use]
    pub fn title_bar_style(&self) -> Style {
        Style::default().fg(self.title_fg).bg(self.title_bg).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    #[must_use]
    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.dim)
    }
}

#[cfg(test)]
mod tests {
    // =====
    // TESTS: 6
    // =====

    use super::*;

    #[test]
    fn focused_pane_is_thick_regardless_of_mode() {
        let theme = Theme::default();
        for mode in [Mode::Normal, Mode::Insert, Mode::Visual] {
            let (style, set) = theme.pane_border(true, mode);
            assert_eq!(style.fg, Some(FOCUSED));
            assert_eq!(set.vertical, '\u{2503}');
        }
    }

    #[test]
    fn unfocused_pane_tracks_mode_color() {
        let theme = Theme::default();
        let (normal, _) = theme.pane_border(false, Mode::Normal);
        let (insert, _) = theme.pane_border(false, Mode::Insert);
        let (visual, _) = theme.pane_border(false, Mode::Visual);
        assert_eq!(normal.fg, Some(UNFOCUSED_NORMAL));
        assert_eq!(insert.fg, Some(INSERT_MODE));
        assert_eq!(visual.fg, Some(VISUAL_MODE));
    }

    #[test]
    fn unfocused_pane_uses_normal_border_set() {
        let (_, set) = Theme::default().pane_border(false, Mode::Insert);
        assert_eq!(set.vertical, '\u{2502}');
        assert_eq!(set.horizontal, '\u{2500}');
    }

    #[test]
    fn mode_colors_are_distinct() {
        let theme = Theme::default();
        assert_ne!(theme.mode_border_color(Mode::Normal), theme.mode_border_color(Mode::Insert));
        assert_ne!(theme.mode_border_color(Mode::Insert), theme.mode_border_color(Mode::Visual));
    }

    #[test]
    fn named_palettes_resolve() {
        assert_eq!(Theme::by_name("mono"), MONO_THEME);
        assert_eq!(Theme::by_name("default"), DEFAULT_THEME);
    }

    #[test]
    fn unknown_name_falls_back_to_default() {
        assert_eq!(Theme::by_name("no-such-theme"), DEFAULT_THEME);
    }
}
