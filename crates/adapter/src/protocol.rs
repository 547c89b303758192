//! Protocol module - JSON message types for history export
//!
//! Histories are written as line-delimited JSON: one `snapshot` message per
//! step of every instruction, then a single `summary` message.
//! Instruction lists are read as `[["BR","ABBABAAB"],["GG"]]`.

use std::io::Write;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{Diagnostic, FieldSnapshot, GemSnapshot, Instruction, PowerGemSnapshot};
use crate::engine::RunOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SnapshotType {
    #[serde(rename = "snapshot")]
    #[default]
    Snapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SummaryType {
    #[serde(rename = "summary")]
    #[default]
    Summary,
}

/// One step of one instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotMessage {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: SnapshotType,
    /// 0-based index into the instruction list
    pub instruction: usize,
    /// 0-based index into that instruction's history
    pub step: usize,
    pub cols: usize,
    pub rows: usize,
    /// Text dump, one string per row
    pub cells: Vec<String>,
    pub gems: Vec<GemMessage>,
    pub power_gems: Vec<PowerGemMessage>,
    pub fingerprint: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GemMessage {
    #[serde(rename = "type")]
    pub gem_type: char,
    pub pos: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_gem: Option<u32>,
}

impl From<&GemSnapshot> for GemMessage {
    fn from(value: &GemSnapshot) -> Self {
        Self {
            gem_type: value.kind.code(),
            pos: value.pos,
            power_gem: value.power_gem.map(|id| id.raw()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerGemMessage {
    pub id: u32,
    pub pos: usize,
    pub width: usize,
    pub height: usize,
    pub color: String,
}

impl From<&PowerGemSnapshot> for PowerGemMessage {
    fn from(value: &PowerGemSnapshot) -> Self {
        Self {
            id: value.id.raw(),
            pos: value.pos,
            width: value.width,
            height: value.height,
            color: value.color.as_str().to_string(),
        }
    }
}

impl SnapshotMessage {
    pub fn from_snapshot(instruction: usize, step: usize, snapshot: &FieldSnapshot) -> Self {
        Self {
            msg_type: SnapshotType::Snapshot,
            instruction,
            step,
            cols: snapshot.cols,
            rows: snapshot.rows,
            cells: snapshot.rows_text(),
            gems: snapshot.gems.iter().map(GemMessage::from).collect(),
            power_gems: snapshot.power_gems.iter().map(PowerGemMessage::from).collect(),
            fingerprint: snapshot.fingerprint,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticMessage {
    pub code: String,
    pub instruction: usize,
    pub message: String,
}

impl From<&Diagnostic> for DiagnosticMessage {
    fn from(value: &Diagnostic) -> Self {
        Self {
            code: value.code().to_string(),
            instruction: value.instruction(),
            message: value.to_string(),
        }
    }
}

/// Final state after all instructions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryMessage {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: SummaryType,
    pub state: String,
    /// `[top-left, "WxH"]` per power gem
    pub power_gems: Vec<(usize, String)>,
    pub stopped: bool,
    #[serde(default)]
    pub diagnostics: Vec<DiagnosticMessage>,
}

impl From<&RunOutcome> for SummaryMessage {
    fn from(value: &RunOutcome) -> Self {
        Self {
            msg_type: SummaryType::Summary,
            state: value.state.clone(),
            power_gems: value.power_gems.iter().map(|r| (r.pos, r.size())).collect(),
            stopped: value.stopped,
            diagnostics: value.diagnostics.iter().map(DiagnosticMessage::from).collect(),
        }
    }
}

/// Parse a JSON instruction list; a missing move entry means no moves
pub fn parse_instructions_json(text: &str) -> Result<Vec<Instruction>> {
    let raw: Vec<Vec<String>> = serde_json::from_str(text)
        .context("instruction list is not a JSON array of arrays")?;

    raw.iter()
        .enumerate()
        .map(|(i, entry)| {
            let (pair, moves) = match entry.as_slice() {
                [pair] => (pair.as_str(), ""),
                [pair, moves] => (pair.as_str(), moves.as_str()),
                _ => bail!("instruction {i}: expected [pair, moves], got {} fields", entry.len()),
            };
            Instruction::new(pair, moves).with_context(|| format!("instruction {i}"))
        })
        .collect()
}

/// Every snapshot of a run in order, then the summary
pub fn history_messages(outcome: &RunOutcome) -> (Vec<SnapshotMessage>, SummaryMessage) {
    let snapshots = outcome
        .histories
        .iter()
        .enumerate()
        .flat_map(|(instruction, history)| {
            history.iter().enumerate().map(move |(step, snapshot)| {
                SnapshotMessage::from_snapshot(instruction, step, snapshot)
            })
        })
        .collect();
    (snapshots, SummaryMessage::from(outcome))
}

/// Write a run as line-delimited JSON
pub fn write_history(out: &mut impl Write, outcome: &RunOutcome) -> Result<()> {
    let (snapshots, summary) = history_messages(outcome);
    for message in &snapshots {
        serde_json::to_writer(&mut *out, message).context("failed to encode snapshot")?;
        out.write_all(b"\n")?;
    }
    serde_json::to_writer(&mut *out, &summary).context("failed to encode summary")?;
    out.write_all(b"\n")?;
    Ok(())
}
