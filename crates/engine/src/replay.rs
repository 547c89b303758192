//! Replay cursor - step through instructions and their histories
//!
//! Holds an engine, the instruction list, a pointer to the next instruction
//! and a pointer into the history of the last one executed. Navigation never
//! fails: moves past either end are refused and reported as `false`.

use puzzle_fighter_core::{ConfigError, FieldConfig, FieldSnapshot, Game, History, Instruction};

#[derive(Debug, Clone)]
pub struct Replay {
    config: FieldConfig,
    game: Game,
    instructions: Vec<Instruction>,
    /// Index of the next instruction to execute
    cursor: usize,
    history: History,
    step: usize,
}

impl Replay {
    pub fn new(config: FieldConfig, instructions: Vec<Instruction>) -> Result<Self, ConfigError> {
        Ok(Self {
            game: Game::new(config)?,
            config,
            instructions,
            cursor: 0,
            history: History::new(),
            step: 0,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of instructions executed so far
    pub fn executed(&self) -> usize {
        self.cursor
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Snapshot under the step pointer
    pub fn current(&self) -> Option<&FieldSnapshot> {
        self.history.get(self.step)
    }

    pub fn can_prev(&self) -> bool {
        self.step > 0
    }

    pub fn can_next(&self) -> bool {
        self.step + 1 < self.history.len()
    }

    pub fn has_more_instructions(&self) -> bool {
        self.cursor < self.instructions.len()
    }

    /// Execute the next instruction and show its first snapshot
    pub fn next_instruction(&mut self) -> bool {
        let Some(instruction) = self.instructions.get(self.cursor) else {
            return false;
        };
        self.history = self.game.exec(instruction);
        self.cursor += 1;
        self.step = 0;
        true
    }

    /// Execute every remaining instruction and show the final snapshot
    pub fn last_instruction(&mut self) -> bool {
        if !self.has_more_instructions() {
            return false;
        }
        while self.next_instruction() {}
        self.step = self.history.len().saturating_sub(1);
        true
    }

    pub fn next_state(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.step += 1;
        true
    }

    pub fn prev_state(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        self.step -= 1;
        true
    }

    /// Fresh engine, nothing executed
    pub fn reset(&mut self) {
        self.game = Game::new(self.config).unwrap_or_default();
        self.cursor = 0;
        self.history.clear();
        self.step = 0;
    }

    /// Replace the instruction list and reset
    pub fn load(&mut self, instructions: Vec<Instruction>) {
        self.instructions = instructions;
        self.reset();
    }

    /// The instruction list with `> ` marking the last one executed
    pub fn command_list(&self) -> String {
        self.instructions
            .iter()
            .enumerate()
            .map(|(i, ins)| {
                let marker = if i + 1 == self.cursor { "> " } else { "  " };
                format!("{marker}{ins}\n")
            })
            .collect()
    }
}
