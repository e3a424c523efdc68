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

use crate::app::state::App;
use crate::app::vim::{self, Focus, Mode, VimCommand};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Route one key event through the mode/focus priority chain.
///
/// Order matters: force-quit first, then focus cycling, then mode changes,
/// then whatever the focused pane does with the rest. Cycle and mode keys
/// are consumed even when the transition is rejected, so a Tab in Insert
/// mode is a no-op rather than a literal tab character.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if app.should_quit() {
        return;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && matches!(key.code, KeyCode::Char('c' | 'q')) {
        app.vim = vim::transition(app.vim, VimCommand::ForceQuit);
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.vim = vim::transition(app.vim, VimCommand::FocusNext);
            return;
        }
        KeyCode::BackTab => {
            app.vim = vim::transition(app.vim, VimCommand::FocusPrev);
            return;
        }
        KeyCode::Char('w') if ctrl => {
            app.vim = vim::transition(app.vim, VimCommand::FocusNext);
            return;
        }
        KeyCode::Char('i' | 'a') if app.vim.mode == Mode::Normal => {
            app.vim = vim::transition(app.vim, VimCommand::EnterInsert);
            return;
        }
        KeyCode::Esc => {
            app.vim = vim::transition(app.vim, VimCommand::ExitInsert);
            return;
        }
        _ => {}
    }

    match app.vim.focus {
        Focus::History => handle_history_key(app, key),
        Focus::Buffer => handle_buffer_key(app, key),
        Focus::Input => handle_input_key(app, key),
    }
}

fn handle_history_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.sessions.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.sessions.select_prev(),
        KeyCode::Enter => app.activate_selected_session(),
        _ => {}
    }
}

fn handle_buffer_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('k') | KeyCode::Up => app.chat.scroll_up(),
        KeyCode::Char('j') | KeyCode::Down => app.chat.scroll_down(),
        KeyCode::Char('G') => app.chat.scroll_to_bottom(),
        KeyCode::Char('y') => app.copy_last_message(),
        _ => {}
    }
}

fn handle_input_key(app: &mut App, key: KeyEvent) {
    if app.vim.mode != Mode::Insert {
        return;
    }
    match key.code {
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::SHIFT) => {
            app.input.insert_newline();
        }
        KeyCode::Enter => app.submit_input(),
        KeyCode::Char(ch) => app.input.insert_char(ch),
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => app.input.delete(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Up => app.input.move_up(),
        KeyCode::Down => app.input.move_down(),
        _ => {}
    }
}
