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

//! vai is a vim-modal terminal chat client: a session list, a chat buffer
//! of bordered message bubbles, and a multi-line input area, driven by a
//! Normal/Insert/Visual mode machine.

pub mod app;
pub mod chat;
pub mod clipboard;
pub mod config;
pub mod session;
pub mod ui;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vai", version, about = "A vim-modal terminal chat client")]
pub struct Cli {
    /// Model name stamped on newly created sessions
    #[arg(long)]
    pub model: Option<String>,

    /// Config file path (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file; logging is disabled without it
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. "info" or "vai=debug"
    #[arg(long, default_value = "info")]
    pub log_filter: String,

    /// Append to the log file instead of truncating it
    #[arg(long)]
    pub log_append: bool,
}
