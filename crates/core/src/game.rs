//! Game engine - owns the field and executes instructions
//!
//! `exec` runs one instruction to completion:
//!
//! 1. stop if the spawn cells are taken (game over is permanent)
//! 2. spawn the pair at column `spawn_offset`, pivot above partner
//! 3. apply the moves, skipping unknown codes
//! 4. land everything under gravity
//! 5. run the resolution loop until nothing changes
//!
//! Every observable change is recorded as a [`FieldSnapshot`] in the returned
//! [`History`].

use std::collections::BTreeMap;

use crate::config::{ConfigError, FieldConfig};
use crate::diagnostics::Diagnostic;
use crate::field::Field;
use crate::gem::{Gem, GemId};
use crate::instruction::Instruction;
use crate::pair::FallingPair;
use crate::power_gem::{PowerGem, PowerGemId};
use crate::snapshot::{FieldSnapshot, History, PowerGemReport, PowerGemSnapshot};
use crate::types::{GemKind, Move};

mod resolve;

/// Where the engine is in its per-instruction pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// No instruction executed yet
    #[default]
    Idle,
    Spawning,
    Moving,
    Falling,
    Resolving,
    /// The last instruction ran to completion
    Settled,
    /// Game over: the spawn area was blocked, no further instruction runs
    Stopped,
}

#[derive(Debug, Clone)]
pub struct Game {
    config: FieldConfig,
    field: Field,
    /// Live gems keyed by allocation order
    gems: BTreeMap<GemId, Gem>,
    power_gems: BTreeMap<PowerGemId, PowerGem>,
    next_gem_id: u32,
    next_power_gem_id: u32,
    phase: Phase,
    /// Number of `exec` calls that got past the stopped check
    instructions_run: usize,
    diagnostics: Vec<Diagnostic>,
}

impl Default for Game {
    fn default() -> Self {
        Self::with_config(FieldConfig::default())
    }
}

impl Game {
    /// Create an engine on an empty field
    pub fn new(config: FieldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    fn with_config(config: FieldConfig) -> Self {
        Self {
            field: Field::new(config.cols, config.rows),
            config,
            gems: BTreeMap::new(),
            power_gems: BTreeMap::new(),
            next_gem_id: 1,
            next_power_gem_id: 1,
            phase: Phase::Idle,
            instructions_run: 0,
            diagnostics: Vec::new(),
        }
    }

    pub fn config(&self) -> FieldConfig {
        self.config
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_stopped(&self) -> bool {
        self.phase == Phase::Stopped
    }

    pub fn instructions_run(&self) -> usize {
        self.instructions_run
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Drain the diagnostics log
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn gem(&self, id: GemId) -> Option<&Gem> {
        self.gems.get(&id)
    }

    /// Gem occupying `pos`
    pub fn gem_at(&self, pos: usize) -> Option<&Gem> {
        self.field.at(pos).and_then(|id| self.gems.get(&id))
    }

    pub fn gem_count(&self) -> usize {
        self.gems.len()
    }

    pub fn power_gem(&self, id: PowerGemId) -> Option<&PowerGem> {
        self.power_gems.get(&id)
    }

    /// Live power gems ordered by top-left position
    pub fn power_gems(&self) -> Vec<&PowerGem> {
        let mut out: Vec<&PowerGem> = self.power_gems.values().collect();
        out.sort_by_key(|pg| (pg.pos(), pg.id()));
        out
    }

    /// Execute one instruction and return the snapshots it produced
    ///
    /// Returns an empty history once the engine is stopped.
    ///
    /// # Examples
    ///
    /// ```
    /// use puzzle_fighter_core::{Game, Instruction};
    ///
    /// let mut game = Game::default();
    /// let history = game.exec(&Instruction::new("BR", "").unwrap());
    ///
    /// // Spawn, then ten rows of falling
    /// assert_eq!(history.len(), 11);
    /// assert!(game.state_string().ends_with("   B  \n   R  "));
    /// ```
    pub fn exec(&mut self, instruction: &Instruction) -> History {
        let mut history = History::new();
        if self.is_stopped() {
            return history;
        }
        self.instructions_run += 1;

        let (pivot_pos, partner_pos) = self.config.spawn_cells();
        if self.field.is_occupied(pivot_pos) || self.field.is_occupied(partner_pos) {
            self.phase = Phase::Stopped;
            self.log(Diagnostic::GameOver {
                instruction: self.instructions_run,
            });
            return history;
        }

        self.phase = Phase::Spawning;
        let pivot = self.spawn(instruction.pivot(), pivot_pos);
        let partner = self.spawn(instruction.partner(), partner_pos);
        history.push(self.snapshot());

        self.phase = Phase::Moving;
        let mut pair = FallingPair::spawned(pivot, pivot_pos, partner, partner_pos);
        for (offset, code) in instruction.moves().chars().enumerate() {
            let Some(mv) = Move::from_code(code) else {
                self.log(Diagnostic::UnknownMove {
                    instruction: self.instructions_run,
                    code,
                    offset,
                });
                continue;
            };
            if let Some(next) = self.try_move(&pair, mv) {
                pair = next;
                history.push(self.snapshot());
            }
        }

        self.phase = Phase::Falling;
        self.land(&mut history);

        self.phase = Phase::Resolving;
        self.resolve(&mut history);

        self.phase = Phase::Settled;
        history
    }

    /// Put a gem straight onto the field, bypassing spawn and moves
    ///
    /// Test fixture for building fields by hand; instructions only reach the
    /// field through [`Game::exec`]. Returns `None` if `pos` is off the field
    /// or taken. Nothing falls or resolves until [`Game::settle`] is called.
    #[doc(hidden)]
    pub fn place(&mut self, kind: GemKind, pos: usize) -> Option<GemId> {
        if !self.field.is_empty(pos) {
            return None;
        }
        Some(self.insert_gem(kind, pos))
    }

    /// Land and resolve the field as if an instruction had just dropped
    ///
    /// Test fixture, paired with [`Game::place`].
    #[doc(hidden)]
    pub fn settle(&mut self) -> History {
        let mut history = History::new();
        if self.is_stopped() {
            return history;
        }
        self.phase = Phase::Falling;
        self.land(&mut history);
        self.phase = Phase::Resolving;
        self.resolve(&mut history);
        self.phase = Phase::Settled;
        history
    }

    /// The text dump of the current field
    pub fn state_string(&self) -> String {
        self.snapshot().to_text()
    }

    /// `(top-left, size)` for every live power gem, ordered by position
    pub fn power_gem_report(&self) -> Vec<PowerGemReport> {
        self.power_gems()
            .into_iter()
            .map(|pg| PowerGemReport {
                pos: pg.pos(),
                width: pg.width(),
                height: pg.height(),
            })
            .collect()
    }

    pub fn snapshot_into(&self, out: &mut FieldSnapshot) {
        use crate::snapshot::GemSnapshot;

        out.clear();
        out.cols = self.field.cols();
        out.rows = self.field.rows();
        out.gems.extend(self.field.occupied().filter_map(|(pos, id)| {
            self.gems.get(&id).map(|gem| GemSnapshot {
                kind: gem.kind(),
                pos,
                power_gem: gem.parent(),
            })
        }));
        out.power_gems
            .extend(self.power_gems().into_iter().map(PowerGemSnapshot::from));
        out.fingerprint = out.compute_fingerprint();
    }

    pub fn snapshot(&self) -> FieldSnapshot {
        let mut s = FieldSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn log(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    fn spawn(&mut self, code: char, pos: usize) -> GemId {
        let kind = match GemKind::from_code(code) {
            Some(kind) => kind,
            None => {
                let fallback = GemKind::default();
                self.log(Diagnostic::UnknownGemType {
                    instruction: self.instructions_run,
                    code,
                    fallback: fallback.code(),
                });
                fallback
            }
        };
        self.insert_gem(kind, pos)
    }

    /// Allocate a gem into an empty cell
    fn insert_gem(&mut self, kind: GemKind, pos: usize) -> GemId {
        let id = GemId::new(self.next_gem_id);
        self.next_gem_id += 1;

        let placed = self.field.put(pos, id);
        debug_assert!(placed, "gem inserted into taken cell {pos}");
        self.gems.insert(id, Gem::new(id, kind, pos));
        id
    }

    /// Apply a move to the pair, returning its new placement on success
    fn try_move(&mut self, pair: &FallingPair, mv: Move) -> Option<FallingPair> {
        let next = match mv {
            Move::Left => pair.shifted(&self.field, -1),
            Move::Right => pair.shifted(&self.field, 1),
            Move::RotateCcw => pair.rotated(&self.field, false),
            Move::RotateCw => pair.rotated(&self.field, true),
        }?;

        // Lift both gems first so the pair never blocks itself
        self.field.take(pair.pivot_pos);
        self.field.take(pair.partner_pos);
        for (id, pos) in [(next.pivot, next.pivot_pos), (next.partner, next.partner_pos)] {
            let placed = self.field.put(pos, id);
            debug_assert!(placed, "pair moved into taken cell {pos}");
            if let Some(gem) = self.gems.get_mut(&id) {
                gem.set_pos(pos);
            }
        }
        Some(next)
    }
}
