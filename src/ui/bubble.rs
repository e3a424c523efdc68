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

use crate::chat::{Block, RenderOptions};
use crate::ui::theme::BorderSet;
use crate::ui::wrap::display_width;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

/// Hard floor for the total bubble width, so the border and title stay
/// legible no matter how short the content is.
pub const MIN_WIDTH: usize = 10;

/// Non-content columns: left/right border plus one padding column each side.
const FRAME: usize = 4;

/// Horizontal placement of the finished bubble within the pane.
/// Positioning only; never part of box sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Maximum bubble width for a pane: two thirds of the pane, floored at 30.
#[must_use]
pub fn cap_width(pane_width: usize) -> usize {
    (pane_width * 2 / 3).max(30)
}

/// Render a message's blocks as a bordered box with a centered title in the
/// top border. The box width follows the content up to [`cap_width`] and
/// never drops below [`MIN_WIDTH`]. Borders use the caller's character set
/// and carry `border_style`; content is unstyled.
#[must_use]
pub fn render(
    title: &str,
    blocks: &[Block],
    pane_width: usize,
    border_style: Style,
    border: &'static BorderSet,
    alignment: Alignment,
    opts: RenderOptions,
) -> Vec<Line<'static>> {
    let cap = cap_width(pane_width);
    let first_inner = cap.saturating_sub(FRAME).max(1);

    let content = render_blocks(blocks, first_inner, opts);
    let content_width = content.iter().map(|l| display_width(l)).max().unwrap_or(0).max(1);

    let bubble_width = (content_width + FRAME).min(cap).max(MIN_WIDTH);
    let inner = bubble_width.saturating_sub(FRAME).max(1);

    // Second pass so the wrapping matches the final box width.
    let content = if inner == first_inner { content } else { render_blocks(blocks, inner, opts) };

    let indent = match alignment {
        Alignment::Left => 0,
        Alignment::Right => pane_width.saturating_sub(bubble_width),
    };

    let mut out = Vec::with_capacity(content.len() + 2);
    out.push(aligned(top_border(title, bubble_width, border), border_style, indent));
    for row in content {
        out.push(body_row(&row, inner, border_style, border, indent));
    }
    out.push(aligned(bottom_border(bubble_width, border), border_style, indent));
    out
}

/// Render every block against the given content width and split the joined
/// result into display rows, hard-splitting any row still wider than the
/// box (code lines render verbatim and must not push the border out).
/// An empty block list yields one empty row.
fn render_blocks(blocks: &[Block], width: usize, opts: RenderOptions) -> Vec<String> {
    let rendered: Vec<String> = blocks.iter().map(|b| b.render_with(width, opts)).collect();
    rendered
        .join("\n")
        .split('\n')
        .flat_map(|row| split_to_width(row, width))
        .collect()
}

/// Hard-split a row at char boundaries so every piece fits in `width`
/// columns. Each piece carries at least one char, so a single over-wide
/// glyph still makes progress. Rows already within `width` pass through.
fn split_to_width(row: &str, width: usize) -> Vec<String> {
    if display_width(row) <= width {
        return vec![row.to_owned()];
    }
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0usize;
    for ch in row.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if !piece.is_empty() && piece_width + ch_width > width {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(ch);
        piece_width += ch_width;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

fn top_border(title: &str, bubble_width: usize, set: &BorderSet) -> String {
    let available = bubble_width.saturating_sub(2);

    let title = if display_width(title) > available {
        if available == 0 {
            String::new()
        } else {
            title.chars().next().map(String::from).unwrap_or_default()
        }
    } else {
        title.to_owned()
    };

    let spaced = format!(" {title} ");
    let embedded =
        if display_width(&spaced) > available || title.is_empty() { title } else { spaced };

    let fill = available.saturating_sub(display_width(&embedded));
    let left = fill / 2;
    let right = fill - left;

    let mut top = String::with_capacity(bubble_width + embedded.len());
    top.push(set.top_left);
    for _ in 0..left {
        top.push(set.horizontal);
    }
    top.push_str(&embedded);
    for _ in 0..right {
        top.push(set.horizontal);
    }
    top.push(set.top_right);
    top
}

fn bottom_border(bubble_width: usize, set: &BorderSet) -> String {
    let mut bottom = String::with_capacity(bubble_width);
    bottom.push(set.bottom_left);
    for _ in 0..bubble_width.saturating_sub(2) {
        bottom.push(set.horizontal);
    }
    bottom.push(set.bottom_right);
    bottom
}

fn body_row(
    row: &str,
    inner: usize,
    border_style: Style,
    set: &BorderSet,
    indent: usize,
) -> Line<'static> {
    let pad = inner.saturating_sub(display_width(row));
    let mut spans = Vec::with_capacity(4);
    if indent > 0 {
        spans.push(Span::raw(" ".repeat(indent)));
    }
    spans.push(Span::styled(set.vertical.to_string(), border_style));
    spans.push(Span::raw(format!(" {row}{} ", " ".repeat(pad))));
    spans.push(Span::styled(set.vertical.to_string(), border_style));
    Line::from(spans)
}

fn aligned(border: String, style: Style, indent: usize) -> Line<'static> {
    if indent == 0 {
        Line::from(Span::styled(border, style))
    } else {
        Line::from(vec![Span::raw(" ".repeat(indent)), Span::styled(border, style)])
    }
}

#[cfg(test)]
mod tests {
    // =====
    // TESTS: 19
    // =====

    use super::*;
    use crate::ui::theme;
    use pretty_assertions::assert_eq;

    fn text(content: &str) -> Vec<Block> {
        vec![Block::Text { content: content.to_owned() }]
    }

    fn boxed(
        title: &str,
        blocks: &[Block],
        pane_width: usize,
        alignment: Alignment,
    ) -> Vec<Line<'static>> {
        render(
            title,
            blocks,
            pane_width,
            Style::default(),
            &theme::NORMAL_BORDER,
            alignment,
            RenderOptions::default(),
        )
    }

    fn widths(lines: &[Line<'_>]) -> Vec<usize> {
        lines.iter().map(|l| display_width(&l.to_string())).collect()
    }

    #[test]
    fn tiny_message_gets_floor_width() {
        let lines = boxed("You", &text("Hi"), 100, Alignment::Left);
        assert_eq!(widths(&lines), vec![10, 10, 10]);
    }

    #[test]
    fn width_follows_content_below_the_cap() {
        let lines = boxed("AI", &text("hello there"), 100, Alignment::Left);
        // content 11 columns + 4 frame columns
        assert_eq!(widths(&lines), vec![15, 15, 15]);
    }

    #[test]
    fn long_content_stops_at_the_cap() {
        let long = "word ".repeat(50);
        let lines = boxed("AI", &text(&long), 90, Alignment::Left);
        let cap = cap_width(90);
        let all = widths(&lines);
        for w in &all {
            assert!(*w <= cap, "line width {w} exceeds cap {cap}");
        }
        // 11 four-column words with separators measure 54, plus the frame.
        assert_eq!(all[0], 58);
        assert!(all.iter().all(|w| *w == all[0]), "ragged box edge");
    }

    #[test]
    fn long_code_line_is_hard_wrapped_to_the_box() {
        let code = vec![Block::Code {
            lang: "raw".to_owned(),
            lines: vec!["x".repeat(120)],
            number: 1,
        }];
        let lines = boxed("AI", &code, 90, Alignment::Left);
        let cap = cap_width(90);
        let all = widths(&lines);
        for w in &all {
            assert!(*w <= cap, "line width {w} exceeds cap {cap}");
        }
        assert!(all.iter().all(|w| *w == all[0]), "ragged box edge");
        // nothing was dropped: the pieces still carry all 120 chars
        let body: String = lines.iter().map(ToString::to_string).collect();
        assert_eq!(body.matches('x').count(), 120);
    }

    #[test]
    fn unwrapped_text_is_still_clamped_to_the_box() {
        let opts = RenderOptions { word_wrap: false, ..RenderOptions::default() };
        let lines = render(
            "AI",
            &text(&"no wrap here at all ".repeat(10)),
            90,
            Style::default(),
            &theme::NORMAL_BORDER,
            Alignment::Left,
            opts,
        );
        let cap = cap_width(90);
        for w in widths(&lines) {
            assert!(w <= cap, "line width {w} exceeds cap {cap}");
        }
    }

    #[test]
    fn bubble_width_always_in_bounds() {
        let big = "a".repeat(500);
        for pane in [30, 40, 60, 100, 200] {
            for content in ["x", "hello world", big.as_str()] {
                let lines = boxed("You", &text(content), pane, Alignment::Left);
                for w in widths(&lines) {
                    assert!((MIN_WIDTH..=cap_width(pane)).contains(&w), "{w} out of bounds");
                }
            }
        }
    }

    #[test]
    fn cap_is_two_thirds_floored_at_thirty() {
        assert_eq!(cap_width(100), 66);
        assert_eq!(cap_width(45), 30);
        assert_eq!(cap_width(0), 30);
    }

    #[test]
    fn title_is_centered_in_top_border() {
        let lines = boxed("You", &text("Hi"), 100, Alignment::Left);
        // width 10: 8 border columns, " You " is 5, split 1 left / 2 right
        assert_eq!(lines[0].to_string(), "\u{250C}\u{2500} You \u{2500}\u{2500}\u{2510}");
    }

    #[test]
    fn over_wide_title_truncates_to_first_char() {
        let lines = boxed("An Extremely Long Title", &text("Hi"), 100, Alignment::Left);
        let top = lines[0].to_string();
        assert!(top.contains(" A "), "expected truncated title in {top:?}");
        assert_eq!(display_width(&top), 10);
    }

    #[test]
    fn empty_title_renders_solid_border() {
        let lines = boxed("", &text("Hi"), 100, Alignment::Left);
        let top = lines[0].to_string();
        assert_eq!(top, format!("\u{250C}{}\u{2510}", "\u{2500}".repeat(8)));
    }

    #[test]
    fn content_rewraps_to_final_box_width() {
        // First pass wraps at cap-4; the measured content is narrower, so the
        // second pass wraps at the final inner width and nothing overflows.
        let lines = boxed("AI", &text("alpha beta gamma delta"), 300, Alignment::Left);
        let total = widths(&lines)[0];
        for w in widths(&lines) {
            assert_eq!(w, total, "ragged box edge");
        }
    }

    #[test]
    fn empty_message_still_renders_a_box() {
        let lines = boxed("AI", &[], 100, Alignment::Left);
        assert_eq!(widths(&lines), vec![10, 10, 10]);
    }

    #[test]
    fn right_alignment_pads_to_pane_edge() {
        let lines = boxed("You", &text("Hi"), 40, Alignment::Right);
        for line in &lines {
            let s = line.to_string();
            assert!(s.starts_with(&" ".repeat(30)), "missing indent in {s:?}");
            assert_eq!(display_width(&s), 40);
        }
    }

    #[test]
    fn left_alignment_has_no_indent() {
        let lines = boxed("AI", &text("Hi"), 40, Alignment::Left);
        assert!(lines[0].to_string().starts_with('\u{250C}'));
    }

    #[test]
    fn caller_chooses_the_border_set() {
        let lines = render(
            "AI",
            &text("Hi"),
            100,
            Style::default(),
            &theme::THICK_BORDER,
            Alignment::Left,
            RenderOptions::default(),
        );
        assert!(lines[0].to_string().starts_with('\u{250F}'));
        assert!(lines[1].to_string().starts_with('\u{2503}'));
    }

    #[test]
    fn multi_block_content_joins_in_order() {
        let blocks = vec![
            Block::Text { content: "intro".to_owned() },
            Block::Code { lang: "rs".to_owned(), lines: vec!["let a = 1;".to_owned()], number: 1 },
        ];
        let lines = boxed("AI", &blocks, 100, Alignment::Left);
        let body: Vec<String> = lines.iter().map(ToString::to_string).collect();
        assert!(body[1].contains("intro"));
        assert!(body[2].contains("[1] rs"));
        assert!(body[3].contains("let a = 1;"));
    }

    #[test]
    fn wide_glyph_content_measures_in_columns() {
        let lines = boxed("You", &text("\u{4F60}\u{597D}\u{4E16}\u{754C}"), 100, Alignment::Left);
        // 8 columns of CJK + 4 frame = 12
        assert_eq!(widths(&lines), vec![12, 12, 12]);
    }

    #[test]
    fn narrow_pane_still_honors_min_width() {
        // pane narrower than the bubble: alignment indent clamps to zero
        let lines = boxed("You", &text("Hi"), 5, Alignment::Right);
        assert_eq!(widths(&lines), vec![10, 10, 10]);
    }

    #[test]
    fn border_style_applies_to_frame_only() {
        let style = Style::default().fg(theme::USER_BORDER);
        let lines = render(
            "You",
            &text("Hi"),
            100,
            style,
            &theme::NORMAL_BORDER,
            Alignment::Left,
            RenderOptions::default(),
        );
        // body row: [border, content, border]
        let body = &lines[1];
        assert_eq!(body.spans[0].style, style);
        assert_eq!(body.spans[1].style, Style::default());
        assert_eq!(body.spans[2].style, style);
    }
}
