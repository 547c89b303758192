use std::fmt;

use crate::power_gem::{PowerGem, PowerGemId};
use crate::types::{GemColor, GemKind};

/// One gem as it stood when the snapshot was taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GemSnapshot {
    pub kind: GemKind,
    pub pos: usize,
    pub power_gem: Option<PowerGemId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PowerGemSnapshot {
    pub id: PowerGemId,
    /// Top-left cell
    pub pos: usize,
    pub width: usize,
    pub height: usize,
    pub color: GemColor,
}

impl From<&PowerGem> for PowerGemSnapshot {
    fn from(value: &PowerGem) -> Self {
        Self {
            id: value.id(),
            pos: value.pos(),
            width: value.width(),
            height: value.height(),
            color: value.color(),
        }
    }
}

/// `(top-left, "WxH")` entry of the power gem report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PowerGemReport {
    pub pos: usize,
    pub width: usize,
    pub height: usize,
}

impl PowerGemReport {
    /// Size as `"WxH"`
    pub fn size(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

impl From<&PowerGemSnapshot> for PowerGemReport {
    fn from(value: &PowerGemSnapshot) -> Self {
        Self {
            pos: value.pos,
            width: value.width,
            height: value.height,
        }
    }
}

impl fmt::Display for PowerGemReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}x{}", self.pos, self.width, self.height)
    }
}

/// Deep copy of the field at one step of an instruction
///
/// `gems` is ordered by position and `power_gems` by top-left position, so
/// two snapshots of the same field compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldSnapshot {
    pub cols: usize,
    pub rows: usize,
    pub gems: Vec<GemSnapshot>,
    pub power_gems: Vec<PowerGemSnapshot>,
    /// FNV-1a 64 over the row-major cell codes (space for empty)
    pub fingerprint: u64,
}

/// Snapshots taken while one instruction executed, in order
pub type History = Vec<FieldSnapshot>;

/// FNV-1a 64-bit.
pub fn fnv1a64(bytes: impl IntoIterator<Item = u8>) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}

impl FieldSnapshot {
    pub fn clear(&mut self) {
        self.cols = 0;
        self.rows = 0;
        self.gems.clear();
        self.power_gems.clear();
        self.fingerprint = 0;
    }

    /// Gem at `pos`, if any
    pub fn cell(&self, pos: usize) -> Option<&GemSnapshot> {
        self.gems
            .binary_search_by_key(&pos, |gem| gem.pos)
            .ok()
            .map(|i| &self.gems[i])
    }

    /// Row-major ASCII codes of every cell, `b' '` for empty ones
    pub fn cell_codes(&self) -> Vec<u8> {
        let mut codes = vec![b' '; self.cols * self.rows];
        for gem in &self.gems {
            if let Some(slot) = codes.get_mut(gem.pos) {
                // Gem codes are ASCII
                *slot = gem.kind.code() as u8;
            }
        }
        codes
    }

    /// Each row as a string exactly `cols` characters wide
    pub fn rows_text(&self) -> Vec<String> {
        if self.cols == 0 {
            return Vec::new();
        }
        self.cell_codes()
            .chunks(self.cols)
            .map(|row| row.iter().map(|&b| b as char).collect())
            .collect()
    }

    /// The text dump: rows joined with `\n`
    pub fn to_text(&self) -> String {
        self.rows_text().join("\n")
    }

    pub fn report(&self) -> Vec<PowerGemReport> {
        self.power_gems.iter().map(PowerGemReport::from).collect()
    }

    pub fn compute_fingerprint(&self) -> u64 {
        fnv1a64(self.cell_codes())
    }

    pub fn gem_count(&self) -> usize {
        self.gems.len()
    }

    /// Members recorded for a power gem
    pub fn members_of(&self, id: PowerGemId) -> usize {
        self.gems.iter().filter(|gem| gem.power_gem == Some(id)).count()
    }
}

impl fmt::Display for FieldSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
