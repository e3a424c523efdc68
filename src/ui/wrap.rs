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

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal columns.
/// Wide glyphs (CJK, emoji) count as two columns; this is not a char count.
#[must_use]
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Word-wrap a single line to `max_width` display columns.
///
/// Words are whitespace-delimited; runs of whitespace collapse. A word wider
/// than `max_width` is hard-split at character boundaries, emitting full
/// segments as lines; the final partial segment stays open so a following
/// word can share its line. Every segment carries at least one character,
/// so a single glyph wider than `max_width` still makes progress (and is
/// the only way an output line can exceed `max_width`).
#[must_use]
pub fn wrap_line(line: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in line.split_whitespace() {
        let word_width = display_width(word);

        if word_width > max_width {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            let mut seg = String::new();
            let mut seg_width = 0usize;
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if !seg.is_empty() && seg_width + ch_width > max_width {
                    out.push(std::mem::take(&mut seg));
                    seg_width = 0;
                }
                seg.push(ch);
                seg_width += ch_width;
            }
            current = seg;
            current_width = seg_width;
        } else if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            out.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// Word-wrap multi-line text. Each original line wraps independently and the
/// results are rejoined with `\n`; paragraph breaks never reflow across
/// original line boundaries. Non-positive widths yield an empty string.
#[must_use]
pub fn wrap(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let wrapped: Vec<String> =
        text.split('\n').map(|line| wrap_line(line, max_width).join("\n")).collect();
    wrapped.join("\n")
}
