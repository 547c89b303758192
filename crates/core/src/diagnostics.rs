//! Non-fatal events recorded while executing instructions
//!
//! The engine never aborts an instruction for bad input. It substitutes a
//! default or skips the offending unit and appends a [`Diagnostic`] to its
//! log, which callers drain with [`Game::take_diagnostics`](crate::Game::take_diagnostics).
//! `instruction` is the 1-based number of the `exec` call that raised it.

use thiserror::Error;

use crate::power_gem::PowerGemError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("instruction {instruction}: unknown gem type {code:?}, placed {fallback:?} instead")]
    UnknownGemType {
        instruction: usize,
        code: char,
        fallback: char,
    },
    #[error("instruction {instruction}: unknown move {code:?} at offset {offset}, skipped")]
    UnknownMove {
        instruction: usize,
        code: char,
        offset: usize,
    },
    #[error("instruction {instruction}: spawn area blocked, game over")]
    GameOver { instruction: usize },
    #[error("instruction {instruction}: power gem formation aborted")]
    FormationAborted {
        instruction: usize,
        #[source]
        error: PowerGemError,
    },
}

impl Diagnostic {
    pub fn code(&self) -> &'static str {
        match self {
            Diagnostic::UnknownGemType { .. } => "unknown_gem_type",
            Diagnostic::UnknownMove { .. } => "unknown_move",
            Diagnostic::GameOver { .. } => "game_over",
            Diagnostic::FormationAborted { .. } => "formation_aborted",
        }
    }

    pub fn instruction(&self) -> usize {
        match self {
            Diagnostic::UnknownGemType { instruction, .. }
            | Diagnostic::UnknownMove { instruction, .. }
            | Diagnostic::GameOver { instruction }
            | Diagnostic::FormationAborted { instruction, .. } => *instruction,
        }
    }
}
