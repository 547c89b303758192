//! Instruction scripts
//!
//! One instruction per line, either whitespace separated or in the command
//! list form the editor prints:
//!
//! ```text
//! # opening
//! BR ABBABAAB
//! > ['RR'], ['LLL']
//! GG,RR
//! BB
//! ```
//!
//! Brackets, quotes and a leading `>` cursor marker are ignored, blank lines
//! and `#` comments are skipped, and a missing move column means no moves.

use thiserror::Error;

use puzzle_fighter_core::{Instruction, InstructionError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("line {line}: {source}")]
    Pair {
        line: usize,
        #[source]
        source: InstructionError,
    },
    #[error("line {line}: unexpected field {field:?} after the moves")]
    UnexpectedField { line: usize, field: String },
}

impl ScriptError {
    pub fn code(&self) -> &'static str {
        match self {
            ScriptError::Pair { .. } => "invalid_pair",
            ScriptError::UnexpectedField { .. } => "unexpected_field",
        }
    }

    /// 1-based line the error was found on
    pub fn line(&self) -> usize {
        match self {
            ScriptError::Pair { line, .. } | ScriptError::UnexpectedField { line, .. } => *line,
        }
    }
}

/// Parse a whole script
///
/// # Examples
///
/// ```
/// use puzzle_fighter_engine::parse_script;
///
/// let instructions = parse_script("BR ABBABAAB\n['RR'], ['LLL']\n").unwrap();
/// assert_eq!(instructions.len(), 2);
/// assert_eq!(instructions[1].moves(), "LLL");
/// ```
pub fn parse_script(text: &str) -> Result<Vec<Instruction>, ScriptError> {
    let mut out = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if let Some(instruction) = parse_line(line, i + 1)? {
            out.push(instruction);
        }
    }
    Ok(out)
}

/// Parse one line; `Ok(None)` for blank lines and comments
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Instruction>, ScriptError> {
    let line = line.trim();
    let line = line.strip_prefix('>').unwrap_or(line).trim_start();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let cleaned: String = line
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '\'' | '"'))
        .map(|c| if c == ',' { ' ' } else { c })
        .collect();
    let mut fields = cleaned.split_whitespace();

    let Some(pair) = fields.next() else {
        // Only brackets and quotes on the line
        return Ok(None);
    };
    let moves = fields.next().unwrap_or("");
    if let Some(extra) = fields.next() {
        return Err(ScriptError::UnexpectedField {
            line: line_no,
            field: extra.to_string(),
        });
    }

    Instruction::new(pair, moves)
        .map(Some)
        .map_err(|source| ScriptError::Pair {
            line: line_no,
            source,
        })
}

/// Render instructions back into the command list form, one per line
pub fn format_script(instructions: &[Instruction]) -> String {
    instructions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
