//! Adapter module - JSON interchange for instructions and histories
//!
//! This crate lets external tools drive the simulation and render its
//! output without linking against the engine types directly. Renderers get
//! every intermediate step of every instruction, so they can animate falls,
//! formations and destructions one snapshot at a time.
//!
//! # Protocol Overview
//!
//! The adapter speaks **line-delimited JSON**:
//!
//! 1. **Input**: an instruction list `[["BR","ABBABAAB"],["RR","LLL"]]`
//! 2. **Snapshots**: one `snapshot` object per history step, in execution order
//! 3. **Summary**: a final `summary` object with the text dump, the power gem
//!    report, the stopped flag and any diagnostics
//!
//! # Message Types
//!
//! - **snapshot**: `instruction`, `step`, `cols`, `rows`, `cells` (text rows),
//!   `gems` (`type`, `pos`, optional `power_gem`), `power_gems` (`id`, `pos`,
//!   `width`, `height`, `color`), `fingerprint`
//! - **summary**: `state`, `power_gems` as `[pos, "WxH"]`, `stopped`,
//!   `diagnostics` (`code`, `instruction`, `message`)
//!
//! # Example Output
//!
//! ```text
//! {"type":"snapshot","instruction":0,"step":0,"cols":6,"rows":12,"cells":[...],...}
//! ...
//! {"type":"summary","state":"...","power_gems":[[62,"2x2"]],"stopped":false,"diagnostics":[]}
//! ```
//!
//! See [`protocol`] for message structure definitions.

pub mod protocol;

pub use puzzle_fighter_core as core;
pub use puzzle_fighter_engine as engine;
pub use puzzle_fighter_types as types;

pub use protocol::{parse_instructions_json, write_history, SnapshotMessage, SummaryMessage};
