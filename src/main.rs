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

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::OpenOptions;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use vai::app::{self, App};
use vai::config::Config;
use vai::session::SessionStore;
use vai::Cli;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::default_path()?,
    };
    let config = Config::load_from(&config_path)?;

    let model = cli.model.clone().unwrap_or_else(|| {
        if config.model.is_empty() { "default".to_owned() } else { config.model.clone() }
    });

    // A broken session store should not keep the UI from starting.
    let (store, sessions, load_error) = match SessionStore::default_location() {
        Ok(store) => match store.load_all() {
            Ok(sessions) => (Some(store), sessions, None),
            Err(err) => {
                warn!("session load failed: {err:#}");
                (Some(store), Vec::new(), Some(err))
            }
        },
        Err(err) => (None, Vec::new(), Some(err)),
    };

    let mut app = App::new(config, store, sessions, model);
    if let Some(err) = load_error {
        app.set_status(format!("sessions unavailable: {err}"));
    }
    app::run_tui(&mut app)
}

/// File-based logging, enabled only with `--log-file`. Stdout belongs to
/// the TUI, so nothing is ever logged there.
fn init_tracing(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };

    let mut options = OpenOptions::new();
    options.create(true).write(true);
    if cli.log_append {
        options.append(true);
    } else {
        options.truncate(true);
    }
    let file = options
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_new(&cli.log_filter)
        .with_context(|| format!("invalid log filter {:?}", cli.log_filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
