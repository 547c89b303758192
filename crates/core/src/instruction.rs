//! Instructions: a gem pair plus the moves applied to it

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstructionError {
    #[error("gem pair must be exactly two characters, got {len} in {pair:?}")]
    PairLength { pair: String, len: usize },
}

impl InstructionError {
    pub fn code(&self) -> &'static str {
        match self {
            InstructionError::PairLength { .. } => "pair_length",
        }
    }
}

/// One unit of play: spawn `pair`, then apply `moves`
///
/// The pair is checked for length only. Gem codes and move codes are
/// validated when the instruction runs, so bad characters become
/// diagnostics instead of errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Instruction {
    pair: [char; 2],
    moves: String,
}

impl Instruction {
    /// # Examples
    ///
    /// ```
    /// use puzzle_fighter_core::Instruction;
    ///
    /// let ins = Instruction::new("BR", "ABBABAAB").unwrap();
    /// assert_eq!(ins.pivot(), 'B');
    /// assert_eq!(ins.to_string(), "['BR'], ['ABBABAAB']");
    ///
    /// assert!(Instruction::new("BRG", "").is_err());
    /// ```
    pub fn new(pair: &str, moves: impl Into<String>) -> Result<Self, InstructionError> {
        let mut chars = pair.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(pivot), Some(partner), None) => Ok(Self {
                pair: [pivot, partner],
                moves: moves.into(),
            }),
            _ => Err(InstructionError::PairLength {
                pair: pair.to_string(),
                len: pair.chars().count(),
            }),
        }
    }

    pub fn pair(&self) -> [char; 2] {
        self.pair
    }

    /// Gem code spawned on row 0
    pub fn pivot(&self) -> char {
        self.pair[0]
    }

    /// Gem code spawned below the pivot
    pub fn partner(&self) -> char {
        self.pair[1]
    }

    pub fn moves(&self) -> &str {
        &self.moves
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "['{}{}'], ['{}']", self.pair[0], self.pair[1], self.moves)
    }
}
