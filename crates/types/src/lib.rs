//! Core types module - shared vocabulary and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the simulation core, the instruction runner and the JSON adapter alike.
//!
//! # Field Dimensions
//!
//! The reference field is 6 columns by 12 rows, with new pairs entering at
//! column 3:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_COLS` | 6 | Columns (indexed 0-5) |
//! | `DEFAULT_ROWS` | 12 | Rows (indexed 0-11, 0 is the top) |
//! | `DEFAULT_SPAWN_OFFSET` | 3 | Column where the pivot gem spawns |
//!
//! # Gem Codes
//!
//! | Code | Kind |
//! |------|------|
//! | `R` `G` `B` `Y` | simple gem of that color |
//! | `r` `g` `b` `y` | crash gem of that color |
//! | `0` | rainbow gem |
//!
//! # Examples
//!
//! ```
//! use puzzle_fighter_types::{GemColor, GemKind, Move, Orientation};
//!
//! let kind = GemKind::from_code('g').unwrap();
//! assert_eq!(kind, GemKind::Crash(GemColor::Green));
//! assert_eq!(kind.code(), 'g');
//!
//! assert_eq!(Move::from_code('A'), Some(Move::RotateCcw));
//! assert_eq!(Orientation::Bottom.rotate_ccw(), Orientation::Right);
//! ```

/// Default field width in cells
pub const DEFAULT_COLS: usize = 6;

/// Default field height in cells
pub const DEFAULT_ROWS: usize = 12;

/// Default column where a new pair spawns
pub const DEFAULT_SPAWN_OFFSET: usize = 3;

/// Code of the rainbow gem
pub const RAINBOW_CODE: char = '0';

/// Gem colors
///
/// The color of a gem is the lowercase form of its code, so the simple gem
/// `R` and the crash gem `r` are both red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum GemColor {
    #[default]
    Red,
    Green,
    Blue,
    Yellow,
}

impl GemColor {
    pub const ALL: [Self; 4] = [Self::Red, Self::Green, Self::Blue, Self::Yellow];

    /// Parse a color from a gem code (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use puzzle_fighter_types::GemColor;
    ///
    /// assert_eq!(GemColor::from_char('b'), Some(GemColor::Blue));
    /// assert_eq!(GemColor::from_char('B'), Some(GemColor::Blue));
    /// assert_eq!(GemColor::from_char('0'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'r' => Some(GemColor::Red),
            'g' => Some(GemColor::Green),
            'b' => Some(GemColor::Blue),
            'y' => Some(GemColor::Yellow),
            _ => None,
        }
    }

    /// Lowercase color letter
    pub fn as_char(&self) -> char {
        match self {
            GemColor::Red => 'r',
            GemColor::Green => 'g',
            GemColor::Blue => 'b',
            GemColor::Yellow => 'y',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GemColor::Red => "red",
            GemColor::Green => "green",
            GemColor::Blue => "blue",
            GemColor::Yellow => "yellow",
        }
    }
}

/// What a single gem is
///
/// Membership in a power gem is not part of the kind: a simple gem keeps
/// `GemKind::Simple` when absorbed, the grouping lives with the owning
/// composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GemKind {
    /// Plain colored gem, eligible for power gem formation
    Simple(GemColor),
    /// Destroys the connected same-colored group it touches
    Crash(GemColor),
    /// Destroys every gem of the color it lands on
    Rainbow,
}

impl GemKind {
    /// Parse a gem from its single-character code
    ///
    /// # Examples
    ///
    /// ```
    /// use puzzle_fighter_types::{GemColor, GemKind};
    ///
    /// assert_eq!(GemKind::from_code('R'), Some(GemKind::Simple(GemColor::Red)));
    /// assert_eq!(GemKind::from_code('r'), Some(GemKind::Crash(GemColor::Red)));
    /// assert_eq!(GemKind::from_code('0'), Some(GemKind::Rainbow));
    /// assert_eq!(GemKind::from_code('X'), None);
    /// ```
    pub fn from_code(code: char) -> Option<Self> {
        if code == RAINBOW_CODE {
            return Some(GemKind::Rainbow);
        }
        let color = GemColor::from_char(code)?;
        if code.is_ascii_uppercase() {
            Some(GemKind::Simple(color))
        } else {
            Some(GemKind::Crash(color))
        }
    }

    /// Single-character code, the inverse of [`GemKind::from_code`]
    pub fn code(&self) -> char {
        match self {
            GemKind::Simple(color) => color.as_char().to_ascii_uppercase(),
            GemKind::Crash(color) => color.as_char(),
            GemKind::Rainbow => RAINBOW_CODE,
        }
    }

    /// Color of the gem; the rainbow gem has none
    pub fn color(&self) -> Option<GemColor> {
        match self {
            GemKind::Simple(color) | GemKind::Crash(color) => Some(*color),
            GemKind::Rainbow => None,
        }
    }

    pub fn is_crash(&self) -> bool {
        matches!(self, GemKind::Crash(_))
    }

    pub fn is_rainbow(&self) -> bool {
        matches!(self, GemKind::Rainbow)
    }
}

impl Default for GemKind {
    /// Stand-in for unreadable gem codes: a red simple gem
    fn default() -> Self {
        GemKind::Simple(GemColor::default())
    }
}

/// Moves applied to the falling pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// `L`: shift the pair one cell left
    Left,
    /// `R`: shift the pair one cell right
    Right,
    /// `A`: rotate the partner counter-clockwise around the pivot
    RotateCcw,
    /// `B`: rotate the partner clockwise around the pivot
    RotateCw,
}

impl Move {
    /// Parse a move code (case-sensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use puzzle_fighter_types::Move;
    ///
    /// assert_eq!(Move::from_code('L'), Some(Move::Left));
    /// assert_eq!(Move::from_code('B'), Some(Move::RotateCw));
    /// assert_eq!(Move::from_code('l'), None);
    /// ```
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'L' => Some(Move::Left),
            'R' => Some(Move::Right),
            'A' => Some(Move::RotateCcw),
            'B' => Some(Move::RotateCw),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            Move::Left => 'L',
            Move::Right => 'R',
            Move::RotateCcw => 'A',
            Move::RotateCw => 'B',
        }
    }
}

/// Where the partner gem sits relative to the pivot
///
/// A pair spawns vertically with the partner below the pivot. Rotation cycles
/// the partner through the four sides:
///
/// - counter-clockwise: Bottom → Right → Top → Left → Bottom
/// - clockwise: Bottom → Left → Top → Right → Bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    Right,
    #[default]
    Bottom,
    Left,
    Top,
}

impl Orientation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use puzzle_fighter_types::Orientation;
    ///
    /// assert_eq!(Orientation::Bottom.rotate_cw(), Orientation::Left);
    /// assert_eq!(Orientation::Left.rotate_cw(), Orientation::Top);
    /// assert_eq!(Orientation::Top.rotate_cw(), Orientation::Right);
    /// assert_eq!(Orientation::Right.rotate_cw(), Orientation::Bottom);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Orientation::Bottom => Orientation::Left,
            Orientation::Left => Orientation::Top,
            Orientation::Top => Orientation::Right,
            Orientation::Right => Orientation::Bottom,
        }
    }

    /// Rotate counter-clockwise (-90°)
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Orientation::Bottom => Orientation::Right,
            Orientation::Right => Orientation::Top,
            Orientation::Top => Orientation::Left,
            Orientation::Left => Orientation::Bottom,
        }
    }

    /// Partner offset from the pivot as `(row delta, column delta)`
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Orientation::Right => (0, 1),
            Orientation::Bottom => (1, 0),
            Orientation::Left => (0, -1),
            Orientation::Top => (-1, 0),
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Orientation::Left | Orientation::Right)
    }
}
