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

use crate::app::input::InputState;
use crate::app::vim::VimState;
use crate::chat::{markdown, Message, Role};
use crate::clipboard;
use crate::config::Config;
use crate::session::{Session, SessionListState, SessionStore};
use crate::ui::layout::{self, ScreenLayout};
use crate::ui::theme::Theme;
use tracing::{info, warn};

/// Scroll and viewport state for the chat buffer.
///
/// `scroll_offset` counts display lines up from the bottom, so new messages
/// keep the view pinned to the latest content at offset zero. The renderer
/// clamps the offset against the actual line count.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatState {
    pub scroll_offset: usize,
    pub width: usize,
    pub height: usize,
}

impl ChatState {
    pub fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    /// Toward older content.
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Toward newer content.
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
    }
}

/// Combined application state. The orchestrator: key routing and resizes
/// mutate this, rendering reads it.
#[derive(Debug)]
pub struct App {
    pub vim: VimState,
    pub layout: ScreenLayout,
    pub config: Config,
    /// Palette resolved once from `config.theme.name`.
    pub theme: Theme,
    pub sessions: SessionListState,
    pub chat: ChatState,
    pub input: InputState,
    /// Transient informational text shown in the title bar.
    pub status: Option<String>,
    /// Model name stamped on newly created sessions.
    pub model: String,
    store: Option<SessionStore>,
    /// False until the first resize establishes a real terminal size.
    pub ready: bool,
}

impl App {
    #[must_use]
    pub fn new(
        config: Config,
        store: Option<SessionStore>,
        sessions: Vec<Session>,
        model: String,
    ) -> Self {
        let theme = Theme::by_name(&config.theme.name);
        Self {
            vim: VimState::default(),
            layout: ScreenLayout::default(),
            config,
            theme,
            sessions: SessionListState::new(sessions),
            chat: ChatState::default(),
            input: InputState::default(),
            status: None,
            model,
            store,
            ready: false,
        }
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.vim.quitting
    }

    /// Recompute the layout and push the new inner sizes into the panes.
    /// The layout is replaced wholesale, never patched.
    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.layout = layout::compute(i32::from(width), i32::from(height));
        self.chat.set_size(
            self.layout.chat_buffer.inner_width(),
            self.layout.chat_buffer.inner_height(),
        );
        self.ready = true;
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    /// Submit the input draft as a user message into the active session,
    /// creating a session if none exists. Empty drafts are ignored.
    pub fn submit_input(&mut self) {
        let text = self.input.text();
        if text.trim().is_empty() {
            return;
        }

        let blocks = markdown::parse(&text);
        let message = Message::new(Role::User, blocks);

        if self.sessions.sessions.is_empty() {
            self.sessions.sessions.push(Session::new(&self.model));
        }
        if let Some(session) = self.sessions.active_session_mut() {
            session.add_message(message);
            info!("submitted message into session {}", session.id);
        }

        self.persist_active();
        self.input.clear();
        self.chat.scroll_to_bottom();
        self.status = None;
    }

    /// Copy the last message of the active conversation to the clipboard.
    /// Either outcome lands in the status line.
    pub fn copy_last_message(&mut self) {
        let Some(text) =
            self.sessions.active_session().and_then(|s| s.messages.last()).map(Message::source_text)
        else {
            self.set_status("nothing to copy");
            return;
        };
        match clipboard::copy(&text) {
            Ok(()) => self.set_status("copied last message"),
            Err(err) => {
                warn!("clipboard copy failed: {err:#}");
                self.set_status(format!("copy failed: {err}"));
            }
        }
    }

    /// Make the highlighted session the active conversation and snap the
    /// chat view to its newest messages.
    pub fn activate_selected_session(&mut self) {
        self.sessions.activate_selected();
        self.chat.scroll_to_bottom();
    }

    fn persist_active(&mut self) {
        let Some(store) = &self.store else { return };
        let Some(session) = self.sessions.active_session() else { return };
        if let Err(err) = store.save(session) {
            warn!("session save failed: {err:#}");
            self.set_status(format!("save failed: {err}"));
        }
    }
}

#[cfg(test)]
mod tests {
    // =====
    // TESTS: 11
    // =====

    use super::*;
    use crate::chat::Block;
    use pretty_assertions::assert_eq;

    fn app() -> App {
        App::new(Config::default(), None, Vec::new(), "test-model".to_owned())
    }

    // =====
    // on_resize
    // =====

    #[test]
    fn resize_recomputes_layout_and_pane_sizes() {
        let mut app = app();
        assert!(!app.ready);
        app.on_resize(100, 40);
        assert!(app.ready);
        assert_eq!(app.layout.chat_buffer.width, 80);
        assert_eq!(app.chat.width, 78);
        assert_eq!(app.chat.height, 27);
    }

    #[test]
    fn degenerate_resize_clamps_pane_sizes() {
        let mut app = app();
        app.on_resize(5, 3);
        assert_eq!(app.chat.height, 0);
    }

    // =====
    // submit_input
    // =====

    #[test]
    fn submit_creates_a_session_and_appends() {
        let mut app = app();
        app.input.insert_str("hello there");
        app.submit_input();

        let session = app.sessions.active_session().unwrap();
        assert_eq!(session.messages.len(), 1);
        assert_eq!(session.messages[0].role, Role::User);
        assert_eq!(session.model, "test-model");
        assert!(app.input.is_empty());
        assert_eq!(app.chat.scroll_offset, 0);
    }

    #[test]
    fn submit_parses_markdown_into_blocks() {
        let mut app = app();
        app.input.insert_str("look:\n```rust\nlet x = 1;\n```");
        app.submit_input();

        let message = &app.sessions.active_session().unwrap().messages[0];
        assert_eq!(message.blocks, vec![
            Block::Text { content: "look:".to_owned() },
            Block::Code { lang: "rust".to_owned(), lines: vec!["let x = 1;".to_owned()], number: 1 },
        ]);
    }

    #[test]
    fn blank_draft_is_not_submitted() {
        let mut app = app();
        app.input.insert_str("   \n  ");
        app.submit_input();
        assert!(app.sessions.sessions.is_empty());
        // the draft is kept, not silently discarded
        assert!(!app.input.is_empty());
    }

    #[test]
    fn submit_appends_to_the_active_session() {
        let mut app = app();
        app.input.insert_str("first");
        app.submit_input();
        app.input.insert_str("second");
        app.submit_input();

        let session = app.sessions.active_session().unwrap();
        assert_eq!(app.sessions.sessions.len(), 1);
        assert_eq!(session.messages.len(), 2);
        assert_eq!(session.title, "first");
    }

    #[test]
    fn submit_resets_scroll_to_bottom() {
        let mut app = app();
        app.chat.scroll_up();
        app.chat.scroll_up();
        app.input.insert_str("hi");
        app.submit_input();
        assert_eq!(app.chat.scroll_offset, 0);
    }

    // =====
    // copy_last_message / status
    // =====

    #[test]
    fn copy_with_no_messages_sets_status() {
        let mut app = app();
        app.copy_last_message();
        assert_eq!(app.status.as_deref(), Some("nothing to copy"));
    }

    // =====
    // theme selection
    // =====

    #[test]
    fn theme_resolves_from_config_name() {
        use crate::ui::theme::{DEFAULT_THEME, MONO_THEME};

        let mut config = Config::default();
        config.theme.name = "mono".to_owned();
        let app = App::new(config, None, Vec::new(), "m".to_owned());
        assert_eq!(app.theme, MONO_THEME);

        let plain = App::new(Config::default(), None, Vec::new(), "m".to_owned());
        assert_eq!(plain.theme, DEFAULT_THEME);
    }

    // =====
    // ChatState
    // =====

    #[test]
    fn scroll_moves_are_saturating() {
        let mut chat = ChatState::default();
        chat.scroll_down();
        assert_eq!(chat.scroll_offset, 0);
        chat.scroll_up();
        chat.scroll_up();
        assert_eq!(chat.scroll_offset, 2);
        chat.scroll_to_bottom();
        assert_eq!(chat.scroll_offset, 0);
    }

    #[test]
    fn activating_a_session_snaps_to_bottom() {
        let mut app = App::new(
            Config::default(),
            None,
            vec![Session::new("m"), Session::new("m")],
            "m".to_owned(),
        );
        app.chat.scroll_up();
        app.sessions.select_next();
        app.activate_selected_session();
        assert_eq!(app.sessions.active, 1);
        assert_eq!(app.chat.scroll_offset, 0);
    }
}
