//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the field model, the gem and power gem tables, and the
//! engine that executes instructions. It has **zero dependencies** on
//! rendering, terminals, or I/O, making it:
//!
//! - **Deterministic**: the same configuration and instructions produce
//!   bit-identical histories (tables are ordered maps keyed by allocation order)
//! - **Testable**: every rule is reachable through `place` + `settle` fixtures
//! - **Portable**: can run headless, in a CLI, or behind any renderer
//!
//! # Module Structure
//!
//! - [`field`]: flat `cols x rows` grid of gem ids with non-wrapping geometry
//! - [`gem`]: single-cell gems
//! - [`power_gem`]: rectangular composites, expansion and merging
//! - [`pair`]: the falling pair, shifts and rotation with kicks
//! - [`game`]: the engine, gravity and the resolution loop
//! - [`snapshot`]: per-step field copies, text dump, fingerprints
//! - [`instruction`], [`config`], [`diagnostics`]: inputs and non-fatal events
//!
//! # Game Rules
//!
//! - **Pairs** spawn at `spawn_offset`, pivot on row 0, partner below it
//! - **Moves** `L`/`R` shift, `A`/`B` rotate counter-clockwise/clockwise with kicks
//! - **Crash gems** (`r g b y`) destroy their connected same-color group
//! - **Rainbow gems** (`0`) destroy every gem of the color they land on
//! - **Power gems** form from 2x2 blocks of simple gems, grow, merge and fall
//!   as rigid units
//! - **Game over** when a spawn cell is taken; the engine then ignores input
//!
//! # Example
//!
//! ```
//! use puzzle_fighter_core::{Game, Instruction};
//!
//! let mut game = Game::default();
//! for (pair, moves) in [("RR", "L"), ("RR", "")] {
//!     game.exec(&Instruction::new(pair, moves).unwrap());
//! }
//!
//! let report = game.power_gem_report();
//! assert_eq!(report.len(), 1);
//! assert_eq!(report[0].size(), "2x2");
//! ```

pub mod config;
pub mod diagnostics;
pub mod field;
pub mod game;
pub mod gem;
pub mod instruction;
pub mod pair;
pub mod power_gem;
pub mod snapshot;

pub use puzzle_fighter_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, FieldConfig};
pub use diagnostics::Diagnostic;
pub use field::{Cell, Field};
pub use game::{Game, Phase};
pub use gem::{Gem, GemId};
pub use instruction::{Instruction, InstructionError};
pub use pair::FallingPair;
pub use power_gem::{Edge, PowerGem, PowerGemError, PowerGemId, Rect};
pub use snapshot::{fnv1a64, FieldSnapshot, GemSnapshot, History, PowerGemReport, PowerGemSnapshot};
