//! Puzzle Fighter (workspace facade crate).
//!
//! This package exposes `puzzle_fighter::{core,engine,adapter,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use puzzle_fighter_adapter as adapter;
pub use puzzle_fighter_core as core;
pub use puzzle_fighter_engine as engine;
pub use puzzle_fighter_types as types;
