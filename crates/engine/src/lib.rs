//! Instruction-level driving of the simulation core.
//!
//! - [`script`]: parse and print instruction scripts
//! - [`runner`]: run a batch of instructions, collect histories and diagnostics
//! - [`replay`]: step backwards and forwards through per-instruction histories

pub mod replay;
pub mod runner;
pub mod script;

pub use replay::Replay;
pub use runner::{puzzle_fighter, run, RunOutcome};
pub use script::{format_script, parse_line, parse_script, ScriptError};
