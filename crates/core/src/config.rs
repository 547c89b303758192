//! Field configuration

use thiserror::Error;

use crate::types::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_SPAWN_OFFSET};

/// Dimensions of the field and the column new pairs enter at
///
/// Fixed for the lifetime of a [`Game`](crate::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldConfig {
    pub cols: usize,
    pub rows: usize,
    pub spawn_offset: usize,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            spawn_offset: DEFAULT_SPAWN_OFFSET,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("field needs at least 2 columns, got {0}")]
    TooFewColumns(usize),
    #[error("field needs at least 2 rows, got {0}")]
    TooFewRows(usize),
    #[error("spawn offset {offset} is outside a field {cols} columns wide")]
    SpawnOffsetOutOfRange { offset: usize, cols: usize },
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::TooFewColumns(_) => "too_few_columns",
            ConfigError::TooFewRows(_) => "too_few_rows",
            ConfigError::SpawnOffsetOutOfRange { .. } => "spawn_offset_out_of_range",
        }
    }
}

impl FieldConfig {
    /// Build and validate a configuration
    pub fn new(cols: usize, rows: usize, spawn_offset: usize) -> Result<Self, ConfigError> {
        let config = Self {
            cols,
            rows,
            spawn_offset,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cols < 2 {
            return Err(ConfigError::TooFewColumns(self.cols));
        }
        if self.rows < 2 {
            return Err(ConfigError::TooFewRows(self.rows));
        }
        if self.spawn_offset >= self.cols {
            return Err(ConfigError::SpawnOffsetOutOfRange {
                offset: self.spawn_offset,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Cells of the pivot (row 0) and the partner (row 1) of a new pair
    pub fn spawn_cells(&self) -> (usize, usize) {
        (self.spawn_offset, self.cols + self.spawn_offset)
    }

    pub fn cell_count(&self) -> usize {
        self.cols * self.rows
    }
}
