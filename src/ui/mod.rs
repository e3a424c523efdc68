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

//! Screen composition. Every frame is rebuilt from scratch as a
//! [`Text`] value: pure functions of the [`App`] state, so the whole
//! screen is testable without a terminal.

pub mod bubble;
pub mod layout;
pub mod theme;
pub mod wrap;

use crate::app::state::App;
use crate::app::vim::Focus;
use crate::chat::{RenderOptions, Role};
use crate::ui::layout::PaneRect;
use crate::ui::wrap::display_width;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;

/// Draw the composed screen.
pub fn render(frame: &mut Frame, app: &App) {
    frame.render_widget(Paragraph::new(render_text(app)), frame.area());
}

/// Compose the whole screen: title bar, session list and chat buffer side
/// by side, input area below.
#[must_use]
pub fn render_text(app: &App) -> Text<'static> {
    if !app.ready {
        return Text::from("Initializing vai...");
    }

    let mut lines = Vec::new();
    lines.push(title_bar_line(app));

    let session_pane = render_pane(
        session_content(app),
        app.layout.session_list,
        app.vim.focus == Focus::History,
        app,
    );
    let chat_pane = render_pane(
        chat_content(app),
        app.layout.chat_buffer,
        app.vim.focus == Focus::Buffer,
        app,
    );
    lines.extend(join_horizontal(session_pane, chat_pane));

    lines.extend(render_pane(
        input_content(app),
        app.layout.input_area,
        app.vim.focus == Focus::Input,
        app,
    ));

    Text::from(lines)
}

/// Mode label on the left, "Sessions - {title}" centered, transient status
/// on the right, all on the themed title bar background.
fn title_bar_line(app: &App) -> Line<'static> {
    let width = usize::try_from(app.layout.width).unwrap_or(0);
    let left = format!(" {} ", app.vim.mode.label());
    let center = format!("Sessions - {}", app.sessions.active_title());
    let right = app.status.clone().map_or_else(String::new, |s| format!("{s} "));

    let left_w = display_width(&left);
    let center_w = display_width(&center);
    let right_w = display_width(&right);

    let mut bar = left;
    let lead = (width.saturating_sub(center_w) / 2).saturating_sub(left_w);
    bar.push_str(&" ".repeat(lead));
    bar.push_str(&center);
    let used = left_w + lead + center_w;
    bar.push_str(&" ".repeat(width.saturating_sub(used + right_w)));
    bar.push_str(&right);

    fit_line(Line::from(Span::styled(bar, app.theme.title_bar_style())), width)
}

/// Frame `content` into the pane rect, emitting exactly `height` lines of
/// exactly `width` columns. Rects too small for a border collapse to blank
/// lines.
fn render_pane(
    content: Vec<Line<'static>>,
    rect: PaneRect,
    focused: bool,
    app: &App,
) -> Vec<Line<'static>> {
    let width = usize::from(rect.clamped_width());
    let height = usize::from(rect.clamped_height());
    let (style, set) = app.theme.pane_border(focused, app.vim.mode);

    if width < 2 || height < 2 {
        return (0..height).map(|_| fit_line(Line::default(), width)).collect();
    }

    let inner_width = width - 2;
    let inner_height = height - 2;

    let mut out = Vec::with_capacity(height);
    out.push(border_line(set.top_left, set.top_right, set.horizontal, width, style));
    for row in 0..inner_height {
        let body = content.get(row).cloned().unwrap_or_default();
        let fitted = fit_line(body, inner_width);
        let mut spans = Vec::with_capacity(fitted.spans.len() + 2);
        spans.push(Span::styled(set.vertical.to_string(), style));
        spans.extend(fitted.spans);
        spans.push(Span::styled(set.vertical.to_string(), style));
        out.push(Line::from(spans));
    }
    out.push(border_line(set.bottom_left, set.bottom_right, set.horizontal, width, style));
    out
}

fn border_line(left: char, right: char, fill: char, width: usize, style: Style) -> Line<'static> {
    let mut s = String::with_capacity(width * 3);
    s.push(left);
    for _ in 0..width.saturating_sub(2) {
        s.push(fill);
    }
    s.push(right);
    Line::from(Span::styled(s, style))
}

/// Truncate or pad a line to an exact display width, preserving span
/// styles. Truncation is per char and never splits a wide glyph.
fn fit_line(line: Line<'static>, width: usize) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::with_capacity(line.spans.len() + 1);
    let mut used = 0usize;

    for span in line.spans {
        if used >= width {
            break;
        }
        let span_width = display_width(&span.content);
        if used + span_width <= width {
            used += span_width;
            spans.push(span);
        } else {
            let mut kept = String::new();
            for ch in span.content.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if used + ch_width > width {
                    break;
                }
                kept.push(ch);
                used += ch_width;
            }
            spans.push(Span::styled(kept, span.style));
            break;
        }
    }

    if used < width {
        spans.push(Span::raw(" ".repeat(width - used)));
    }
    Line::from(spans)
}

/// Zip two pane line stacks into one, left then right on each row.
/// Both sides already have uniform width; ragged heights pad with nothing.
fn join_horizontal(left: Vec<Line<'static>>, right: Vec<Line<'static>>) -> Vec<Line<'static>> {
    let rows = left.len().max(right.len());
    let mut left = left.into_iter();
    let mut right = right.into_iter();
    (0..rows)
        .map(|_| {
            let mut spans = left.next().map(|l| l.spans).unwrap_or_default();
            spans.extend(right.next().map(|l| l.spans).unwrap_or_default());
            Line::from(spans)
        })
        .collect()
}

/// Session titles, one per row, windowed so the highlighted row stays
/// visible. The active conversation is starred.
fn session_content(app: &App) -> Vec<Line<'static>> {
    let height = app.layout.session_list.inner_height();
    if app.sessions.sessions.is_empty() {
        return vec![Line::from(Span::styled("no sessions".to_owned(), app.theme.dim_style()))];
    }

    let start = app.sessions.selected.saturating_sub(height.saturating_sub(1));
    app.sessions
        .sessions
        .iter()
        .enumerate()
        .skip(start)
        .take(height.max(1))
        .map(|(idx, session)| {
            let marker = if idx == app.sessions.active { "* " } else { "  " };
            let text = format!("{marker}{}", session.display_title());
            if idx == app.sessions.selected {
                Line::from(Span::styled(text, Style::default().add_modifier(Modifier::REVERSED)))
            } else {
                Line::from(Span::raw(text))
            }
        })
        .collect()
}

/// Bubbles for the active conversation, newest at the bottom, clipped to
/// the scroll window. `scroll_offset` counts up from the bottom and is
/// clamped here against the real line count.
fn chat_content(app: &App) -> Vec<Line<'static>> {
    let Some(session) = app.sessions.active_session().filter(|s| !s.messages.is_empty()) else {
        return welcome_lines(app);
    };

    let pane_width = app.chat.width;
    let opts = RenderOptions::from(&app.config.editor);
    let mut all: Vec<Line<'static>> = Vec::new();
    for (idx, message) in session.messages.iter().enumerate() {
        if idx > 0 {
            all.push(Line::default());
        }
        let (color, alignment) = match message.role {
            Role::User => (app.theme.user_border, bubble::Alignment::Right),
            Role::Assistant => (app.theme.assistant_border, bubble::Alignment::Left),
        };
        all.extend(bubble::render(
            message.role.bubble_title(),
            &message.blocks,
            pane_width,
            Style::default().fg(color),
            &theme::NORMAL_BORDER,
            alignment,
            opts,
        ));
    }

    let height = app.chat.height;
    if all.len() <= height {
        return all;
    }
    let max_offset = all.len() - height;
    let offset = app.chat.scroll_offset.min(max_offset);
    let end = all.len() - offset;
    all[end - height..end].to_vec()
}

fn welcome_lines(app: &App) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled("Welcome to vai".to_owned(), app.theme.info_style())),
        Line::default(),
        Line::from(Span::styled(
            "Press i to compose a message, Tab to switch panes,".to_owned(),
            app.theme.dim_style(),
        )),
        Line::from(Span::styled(
            "Enter to send, Ctrl+Q to quit.".to_owned(),
            app.theme.dim_style(),
        )),
    ]
}

/// The draft, with the cursor shown as a reversed cell while editing.
/// Shows a hint when the draft is empty outside Insert mode.
fn input_content(app: &App) -> Vec<Line<'static>> {
    use crate::app::vim::Mode;

    if app.input.is_empty() && app.vim.mode != Mode::Insert {
        return vec![Line::from(Span::styled(
            "Press i to type a message...".to_owned(),
            app.theme.dim_style(),
        ))];
    }

    let (cursor_row, cursor_col) = app.input.cursor();
    let show_cursor = app.vim.mode == Mode::Insert;

    let mut lines: Vec<Line<'static>> = app
        .input
        .lines()
        .iter()
        .enumerate()
        .map(|(row, text)| {
            if show_cursor && row == cursor_row {
                cursor_line(text, cursor_col)
            } else {
                Line::from(Span::raw(text.clone()))
            }
        })
        .collect();

    // keep the cursor row inside the pane window
    let height = app.layout.input_area.inner_height().max(1);
    if lines.len() > height {
        let start = (cursor_row + 1).saturating_sub(height).min(lines.len() - height);
        lines.drain(..start);
        lines.truncate(height);
    }
    lines
}

fn cursor_line(text: &str, cursor_col: usize) -> Line<'static> {
    let before: String = text.chars().take(cursor_col).collect();
    let at: String = text.chars().skip(cursor_col).take(1).collect();
    let after: String = text.chars().skip(cursor_col + 1).collect();
    let cell = if at.is_empty() { " ".to_owned() } else { at };
    Line::from(vec![
        Span::raw(before),
        Span::styled(cell, Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(after),
    ])
}
