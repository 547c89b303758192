//! Batch runner - feed a list of instructions through one engine

use puzzle_fighter_core::{
    ConfigError, Diagnostic, FieldConfig, Game, History, Instruction, PowerGemReport,
};

/// Everything a batch run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Final text dump
    pub state: String,
    pub power_gems: Vec<PowerGemReport>,
    pub stopped: bool,
    /// One history per instruction, empty for instructions run after game over
    pub histories: Vec<History>,
    pub diagnostics: Vec<Diagnostic>,
}

impl RunOutcome {
    /// Total snapshots across all histories
    pub fn snapshot_count(&self) -> usize {
        self.histories.iter().map(Vec::len).sum()
    }
}

/// Run every instruction on a fresh engine
pub fn run(config: FieldConfig, instructions: &[Instruction]) -> Result<RunOutcome, ConfigError> {
    let mut game = Game::new(config)?;
    let histories = instructions.iter().map(|ins| game.exec(ins)).collect();

    Ok(RunOutcome {
        state: game.state_string(),
        power_gems: game.power_gem_report(),
        stopped: game.is_stopped(),
        histories,
        diagnostics: game.take_diagnostics(),
    })
}

/// Final text dump of the default 6x12 field after `instructions`
///
/// # Examples
///
/// ```
/// use puzzle_fighter_core::Instruction;
/// use puzzle_fighter_engine::puzzle_fighter;
///
/// let state = puzzle_fighter(&[Instruction::new("RR", "LLL").unwrap()]);
/// assert!(state.ends_with("R     \nR     "));
/// ```
pub fn puzzle_fighter(instructions: &[Instruction]) -> String {
    let mut game = Game::default();
    for ins in instructions {
        game.exec(ins);
    }
    game.state_string()
}
