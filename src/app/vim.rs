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

/// Vim editing mode. Constrains which keys act as commands vs. literal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Insert,
    Visual,
}

impl Mode {
    /// Uppercase label for the title bar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "INSERT",
            Self::Visual => "VISUAL",
        }
    }
}

/// Which pane currently receives routed key events.
/// Cycles in the fixed order History -> Buffer -> Input -> History.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    History,
    Buffer,
    Input,
}

impl Focus {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::History => Self::Buffer,
            Self::Buffer => Self::Input,
            Self::Input => Self::History,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::History => Self::Input,
            Self::Buffer => Self::History,
            Self::Input => Self::Buffer,
        }
    }
}

/// Mode/focus compatibility matrix, the single source of truth for which
/// modes may be entered while a given pane holds focus. Legality depends
/// only on the destination pair, never on the prior mode.
#[must_use]
pub fn can_transition(focus: Focus, mode: Mode) -> bool {
    match focus {
        Focus::History => matches!(mode, Mode::Normal),
        Focus::Buffer => matches!(mode, Mode::Normal | Mode::Visual),
        Focus::Input => matches!(mode, Mode::Insert),
    }
}

/// Legality for a pair the machine may *rest* on. Everything in the matrix
/// is legal, and Normal mode is additionally legal on any pane: Normal is
/// the traversal mode, so a focus cycle may park it on the input pane
/// without entering Insert.
#[must_use]
fn navigable(mode: Mode, focus: Focus) -> bool {
    mode == Mode::Normal || can_transition(focus, mode)
}

/// Coordinator transitions, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VimCommand {
    /// Ctrl+C / Ctrl+Q: terminal state, nothing transitions out of it.
    ForceQuit,
    /// Advance focus along the cycle. Normal mode only.
    FocusNext,
    /// Reverse focus cycle. Normal mode only.
    FocusPrev,
    /// `i` / `a` in Normal mode: Insert, focus forced to the input pane.
    EnterInsert,
    /// Escape in Insert mode: Normal, focus forced to the chat buffer.
    ExitInsert,
}

/// The live mode/focus pair plus the quit flag.
///
/// Updates are value-in, value-out: [`transition`] consumes a snapshot and
/// returns the next one, and the orchestrator assigns it wholesale. There
/// is never a partially-applied update to roll back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VimState {
    pub mode: Mode,
    pub focus: Focus,
    pub quitting: bool,
}

impl Default for VimState {
    fn default() -> Self {
        Self { mode: Mode::Normal, focus: Focus::Buffer, quitting: false }
    }
}

/// Apply a coordinator command to a state snapshot.
///
/// Illegal transitions are not errors: the prior state comes back
/// unchanged. All legality checks route through [`can_transition`] /
/// [`navigable`]; no call site re-implements the matrix.
#[must_use]
pub fn transition(state: VimState, command: VimCommand) -> VimState {
    if state.quitting {
        return state;
    }
    match command {
        VimCommand::ForceQuit => VimState { quitting: true, ..state },
        VimCommand::FocusNext => cycle(state, state.focus.next()),
        VimCommand::FocusPrev => cycle(state, state.focus.prev()),
        VimCommand::EnterInsert => enter(state, Mode::Insert, Focus::Input, Mode::Normal),
        VimCommand::ExitInsert => enter(state, Mode::Normal, Focus::Buffer, Mode::Insert),
    }
}

fn cycle(state: VimState, focus: Focus) -> VimState {
    if state.mode == Mode::Normal && navigable(state.mode, focus) {
        VimState { focus, ..state }
    } else {
        state
    }
}

fn enter(state: VimState, mode: Mode, focus: Focus, required: Mode) -> VimState {
    if state.mode == required && can_transition(focus, mode) {
        VimState { mode, focus, ..state }
    } else {
        state
    }
}
