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

//! Conversation sessions and their on-disk JSON store.

use crate::chat::{Message, Role};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A saved conversation. Messages are append-only; the title is derived
/// from the first user message unless set explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub title: String,
    pub messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub model: String,
}

/// Max columns of the derived title before truncation.
const TITLE_MAX: usize = 40;

impl Session {
    #[must_use]
    pub fn new(model: &str) -> Self {
        let now = Utc::now();
        Self {
            id: format!("session-{}", uuid::Uuid::new_v4()),
            title: String::new(),
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
            model: model.to_owned(),
        }
    }

    /// Append a message, deriving the title from the first user message.
    pub fn add_message(&mut self, message: Message) {
        if self.title.is_empty() && message.role == Role::User {
            self.title = derive_title(&message.source_text());
        }
        self.messages.push(message);
        self.updated_at = Utc::now();
    }

    /// Title for display, falling back for untitled sessions.
    #[must_use]
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() { "New Chat" } else { &self.title }
    }
}

fn derive_title(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or("").trim();
    if first_line.chars().count() <= TITLE_MAX {
        return first_line.to_owned();
    }
    let truncated: String = first_line.chars().take(TITLE_MAX - 3).collect();
    format!("{}...", truncated.trim_end())
}

/// Reads and writes sessions as one JSON file each under a data directory.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Store rooted at the platform data directory, e.g.
    /// `~/.local/share/vai/sessions` on Linux.
    pub fn default_location() -> Result<Self> {
        let base = dirs::data_dir().context("no data directory on this platform")?;
        Ok(Self::new(base.join("vai").join("sessions")))
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load every session in the store, newest first by update time.
    /// Files that fail to parse are skipped with a warning, not fatal.
    pub fn load_all(&self) -> Result<Vec<Session>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("failed to read session dir {}", self.dir.display()))?;

        let mut sessions = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            match load_session(&path) {
                Ok(session) => sessions.push(session),
                Err(err) => warn!("skipping unreadable session {}: {err:#}", path.display()),
            }
        }
        sessions.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        debug!("loaded {} sessions from {}", sessions.len(), self.dir.display());
        Ok(sessions)
    }

    /// Write a session to `<id>.json`, creating the directory if needed.
    pub fn save(&self, session: &Session) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create session dir {}", self.dir.display()))?;
        let path = self.dir.join(format!("{}.json", session.id));
        let json = serde_json::to_string_pretty(session).context("failed to encode session")?;
        fs::write(&path, json)
            .with_context(|| format!("failed to write session {}", path.display()))?;
        debug!("saved session {} ({} messages)", session.id, session.messages.len());
        Ok(())
    }
}

fn load_session(path: &Path) -> Result<Session> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Selection state for the session history pane.
#[derive(Debug, Clone, Default)]
pub struct SessionListState {
    pub sessions: Vec<Session>,
    pub selected: usize,
    /// Index of the session whose messages fill the chat buffer.
    pub active: usize,
}

impl SessionListState {
    #[must_use]
    pub fn new(sessions: Vec<Session>) -> Self {
        Self { sessions, selected: 0, active: 0 }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.sessions.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Make the highlighted session the active conversation.
    pub fn activate_selected(&mut self) {
        if self.selected < self.sessions.len() {
            self.active = self.selected;
        }
    }

    #[must_use]
    pub fn active_session(&self) -> Option<&Session> {
        self.sessions.get(self.active)
    }

    pub fn active_session_mut(&mut self) -> Option<&mut Session> {
        self.sessions.get_mut(self.active)
    }

    /// Title for the title bar, "New Chat" when nothing is active.
    #[must_use]
    pub fn active_title(&self) -> &str {
        self.active_session().map_or("New Chat", Session::display_title)
    }
}
