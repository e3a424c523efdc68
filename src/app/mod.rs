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

//! Application state and the terminal event loop.

pub mod input;
pub mod keys;
pub mod state;
pub mod vim;

pub use state::App;
pub use vim::{Focus, Mode, VimState};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::info;

/// Run the blocking terminal UI until the user quits.
/// The terminal is restored even when the loop errors out.
pub fn run_tui(app: &mut App) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, app);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    let size = terminal.size().context("failed to query terminal size")?;
    app.on_resize(size.width, size.height);
    info!("ui started at {}x{}", size.width, size.height);

    loop {
        terminal.draw(|frame| crate::ui::render(frame, app))?;

        match event::read().context("failed to read terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => keys::handle_key(app, key),
            Event::Resize(width, height) => app.on_resize(width, height),
            _ => {}
        }

        if app.should_quit() {
            info!("quit requested");
            return Ok(());
        }
    }
}
