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

use crate::config::EditorConfig;
use crate::ui::wrap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Title embedded in the bubble border for this role.
    #[must_use]
    pub fn bubble_title(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "AI",
        }
    }
}

/// Editor-config knobs that shape block rendering. Built once per frame
/// from [`EditorConfig`]; [`RenderOptions::default`] is the plain form
/// and has the line-number gutter off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub word_wrap: bool,
    pub tab_width: usize,
    pub line_numbers: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { word_wrap: true, tab_width: 4, line_numbers: false }
    }
}

impl From<&EditorConfig> for RenderOptions {
    fn from(editor: &EditorConfig) -> Self {
        Self {
            word_wrap: editor.word_wrap,
            tab_width: editor.tab_width,
            line_numbers: editor.line_numbers,
        }
    }
}

/// One unit of message content. A closed union: every render site matches
/// exhaustively, so adding a block kind is a compile-time-checked change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Block {
    Text {
        content: String,
    },
    Code {
        lang: String,
        lines: Vec<String>,
        /// 1-based sequence number of this code block within its message.
        number: usize,
    },
}

impl Block {
    /// Render the block against a maximum display width with default
    /// options. Text wraps; code keeps its lines verbatim under a
    /// `[n] lang` header.
    #[must_use]
    pub fn render(&self, max_width: usize) -> String {
        self.render_with(max_width, RenderOptions::default())
    }

    /// Render the block honoring the editor options: `word_wrap` toggles
    /// text reflow, tabs in code expand to `tab_width` spaces, and
    /// `line_numbers` adds a right-aligned gutter to code lines.
    #[must_use]
    pub fn render_with(&self, max_width: usize, opts: RenderOptions) -> String {
        match self {
            Self::Text { content } => {
                if opts.word_wrap {
                    wrap::wrap(content, max_width)
                } else {
                    content.clone()
                }
            }
            Self::Code { lang, lines, number } => {
                let mut out = if lang.is_empty() {
                    format!("[{number}]")
                } else {
                    format!("[{number}] {lang}")
                };
                let gutter = decimal_width(lines.len());
                for (idx, line) in lines.iter().enumerate() {
                    let line = line.replace('\t', &" ".repeat(opts.tab_width));
                    out.push('\n');
                    if opts.line_numbers {
                        out.push_str(&format!("{:>gutter$} {line}", idx + 1));
                    } else {
                        out.push_str(&line);
                    }
                }
                out
            }
        }
    }

    /// The raw content of the block, without any layout applied.
    /// Used for clipboard copies.
    #[must_use]
    pub fn source_text(&self) -> String {
        match self {
            Self::Text { content } => content.clone(),
            Self::Code { lines, .. } => lines.join("\n"),
        }
    }
}

fn decimal_width(n: usize) -> usize {
    n.max(1).checked_ilog10().map_or(1, |d| d as usize + 1)
}

/// A single message in a conversation. Immutable once constructed; only
/// appended as a whole to a session's message list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub blocks: Vec<Block>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    #[must_use]
    pub fn new(role: Role, blocks: Vec<Block>) -> Self {
        Self {
            id: format!("msg-{}", uuid::Uuid::new_v4()),
            role,
            blocks,
            created_at: Utc::now(),
        }
    }

    /// Render all blocks in order, joined with a line break.
    /// Block order is significant and preserved.
    #[must_use]
    pub fn render(&self, max_width: usize) -> String {
        let rendered: Vec<String> = self.blocks.iter().map(|b| b.render(max_width)).collect();
        rendered.join("\n")
    }

    /// Raw text of the whole message, for the clipboard sink.
    #[must_use]
    pub fn source_text(&self) -> String {
        let parts: Vec<String> = self.blocks.iter().map(Block::source_text).collect();
        parts.join("\n")
    }
}
