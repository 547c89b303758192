//! Power gem module - rectangular composites of simple gems
//!
//! A power gem owns a rectangle of same-colored gems. Its members are kept in
//! row-major order over its bounding rectangle, so `members[i]` sits at the
//! `i`-th cell of [`PowerGem::cells`]. Membership only grows: by absorbing a
//! full strip along one edge, or by merging a neighbouring power gem with a
//! matching edge.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::gem::GemId;
use crate::types::GemColor;

/// Stable id of a power gem, allocated in formation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PowerGemId(u32);

impl PowerGemId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u32 {
        self.0
    }
}

/// Bounding rectangle in field rows/columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub top: usize,
    pub left: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Row-major cell indices on a field `cols` wide
    pub fn cells(&self, cols: usize) -> impl Iterator<Item = usize> {
        let Rect {
            top,
            left,
            width,
            height,
        } = *self;
        (top..top + height)
            .flat_map(move |row| (left..left + width).map(move |col| row * cols + col))
    }

    /// The rectangle extended by one strip on `edge`
    fn grown(&self, edge: Edge, cols: usize) -> Option<Rect> {
        let mut rect = *self;
        match edge {
            Edge::Right => {
                if rect.left + rect.width >= cols {
                    return None;
                }
                rect.width += 1;
            }
            Edge::Bottom => rect.height += 1,
            Edge::Left => {
                rect.left = rect.left.checked_sub(1)?;
                rect.width += 1;
            }
            Edge::Top => {
                rect.top = rect.top.checked_sub(1)?;
                rect.height += 1;
            }
        }
        Some(rect)
    }

    fn union(&self, other: &Rect) -> Rect {
        let top = self.top.min(other.top);
        let left = self.left.min(other.left);
        let bottom = (self.top + self.height).max(other.top + other.height);
        let right = (self.left + self.width).max(other.left + other.width);
        Rect {
            top,
            left,
            width: right - left,
            height: bottom - top,
        }
    }
}

/// Side of a power gem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Right,
    Bottom,
    Left,
    Top,
}

impl Edge {
    /// Order in which a settled power gem tries to grow
    pub const EXPANSION_ORDER: [Edge; 4] = [Edge::Right, Edge::Bottom, Edge::Left, Edge::Top];
}

/// Why a power gem could not be built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PowerGemError {
    #[error("power gem cannot be built from {count} gems")]
    WrongMemberCount { count: usize },
    #[error("{count} gems do not fill a {width}x{height} rectangle")]
    NotRectangular {
        count: usize,
        width: usize,
        height: usize,
    },
}

impl PowerGemError {
    pub fn code(&self) -> &'static str {
        match self {
            PowerGemError::WrongMemberCount { .. } => "wrong_member_count",
            PowerGemError::NotRectangular { .. } => "not_rectangular",
        }
    }
}

/// Member counts a rectangle-completion can start from: even and above 2, or
/// a perfect square
pub fn is_formable_count(count: usize) -> bool {
    count > 0 && ((count % 2 == 0 && count > 2) || is_perfect_square(count))
}

fn is_perfect_square(n: usize) -> bool {
    let mut root = 0usize;
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root * root == n
}

/// Bounding rectangle of position-sorted members, checked to be filled
fn bounding_rect(cols: usize, sorted: &[(GemId, usize)]) -> Result<Rect, PowerGemError> {
    let count = sorted.len();
    let (Some(&(_, first)), Some(&(_, last))) = (sorted.first(), sorted.last()) else {
        return Err(PowerGemError::WrongMemberCount { count });
    };

    let col_start = first % cols;
    let col_end = last % cols;
    let width = col_end.checked_sub(col_start).map_or(0, |d| d + 1);
    if width == 0 || count % width != 0 {
        return Err(PowerGemError::NotRectangular {
            count,
            width,
            height: 0,
        });
    }

    let rect = Rect {
        top: first / cols,
        left: col_start,
        width,
        height: count / width,
    };
    if !rect.cells(cols).eq(sorted.iter().map(|&(_, pos)| pos)) {
        return Err(PowerGemError::NotRectangular {
            count,
            width: rect.width,
            height: rect.height,
        });
    }
    Ok(rect)
}

/// A rectangular block of same-colored gems that moves as one unit
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PowerGem {
    id: PowerGemId,
    color: GemColor,
    /// Width of the field the positions refer to
    field_cols: usize,
    rect: Rect,
    /// Row-major over `rect`
    members: Vec<GemId>,
}

impl PowerGem {
    /// Build a power gem from gems and their positions
    ///
    /// The member count must be even and greater than 2 or a perfect square,
    /// and the positions must fill their bounding rectangle exactly.
    pub fn new(
        id: PowerGemId,
        color: GemColor,
        field_cols: usize,
        gems: &[(GemId, usize)],
    ) -> Result<Self, PowerGemError> {
        if !is_formable_count(gems.len()) {
            return Err(PowerGemError::WrongMemberCount { count: gems.len() });
        }

        let mut sorted = gems.to_vec();
        sorted.sort_by_key(|&(_, pos)| pos);
        let rect = bounding_rect(field_cols, &sorted)?;

        Ok(Self {
            id,
            color,
            field_cols,
            rect,
            members: sorted.into_iter().map(|(gem, _)| gem).collect(),
        })
    }

    pub fn id(&self) -> PowerGemId {
        self.id
    }

    pub fn color(&self) -> GemColor {
        self.color
    }

    /// Index of the top-left cell
    pub fn pos(&self) -> usize {
        self.rect.top * self.field_cols + self.rect.left
    }

    pub fn width(&self) -> usize {
        self.rect.width
    }

    pub fn height(&self) -> usize {
        self.rect.height
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[GemId] {
        &self.members
    }

    pub fn contains(&self, gem: GemId) -> bool {
        self.members.contains(&gem)
    }

    /// Occupied cells, row-major
    pub fn cells(&self) -> impl Iterator<Item = usize> {
        self.rect.cells(self.field_cols)
    }

    /// Members paired with the cell each one occupies
    pub fn members_with_positions(&self) -> impl Iterator<Item = (GemId, usize)> + '_ {
        self.members.iter().copied().zip(self.cells())
    }

    /// Cells just outside `edge`, or `None` if that side touches the field
    /// boundary
    pub fn edge_strip(&self, edge: Edge, field_rows: usize) -> Option<Vec<usize>> {
        let Rect {
            top,
            left,
            width,
            height,
        } = self.rect;
        let cols = self.field_cols;
        let column = |col: usize| (top..top + height).map(|row| row * cols + col).collect();
        let row = |row: usize| (left..left + width).map(|col| row * cols + col).collect();

        match edge {
            Edge::Right => (left + width < cols).then(|| column(left + width)),
            Edge::Left => left.checked_sub(1).map(column),
            Edge::Bottom => (top + height < field_rows).then(|| row(top + height)),
            Edge::Top => top.checked_sub(1).map(row),
        }
    }

    /// Absorb a full strip of gems along `edge`
    ///
    /// Returns false, leaving the power gem untouched, if the strip does not
    /// exactly cover that side.
    pub fn expand(&mut self, edge: Edge, strip: &[(GemId, usize)]) -> bool {
        let Some(grown) = self.rect.grown(edge, self.field_cols) else {
            return false;
        };
        let span = match edge {
            Edge::Right | Edge::Left => self.rect.height,
            Edge::Bottom | Edge::Top => self.rect.width,
        };
        if strip.len() != span {
            return false;
        }
        self.refill(grown, strip.iter().copied())
    }

    /// Side of `self` that `other` can merge onto
    ///
    /// Both must share a color and touch along a full edge: same rows and
    /// adjacent columns, or same columns and adjacent rows.
    pub fn merge_edge(&self, other: &PowerGem) -> Option<Edge> {
        if self.id == other.id || self.color != other.color {
            return None;
        }
        let (a, b) = (self.rect, other.rect);

        if a.top == b.top && a.height == b.height {
            if b.left == a.left + a.width {
                return Some(Edge::Right);
            }
            if a.left == b.left + b.width {
                return Some(Edge::Left);
            }
        }
        if a.left == b.left && a.width == b.width {
            if b.top == a.top + a.height {
                return Some(Edge::Bottom);
            }
            if a.top == b.top + b.height {
                return Some(Edge::Top);
            }
        }
        None
    }

    /// Take over every member of `other`
    pub fn merge(&mut self, other: &PowerGem) -> bool {
        if self.merge_edge(other).is_none() {
            return false;
        }
        let union = self.rect.union(&other.rect);
        self.refill(union, other.members_with_positions())
    }

    /// Move one row down; the caller moves the member gems
    pub(crate) fn descend(&mut self) {
        self.rect.top += 1;
    }

    fn refill(&mut self, rect: Rect, extra: impl Iterator<Item = (GemId, usize)>) -> bool {
        let mut by_pos: BTreeMap<usize, GemId> = self
            .members_with_positions()
            .map(|(gem, pos)| (pos, gem))
            .collect();
        for (gem, pos) in extra {
            by_pos.insert(pos, gem);
        }
        if by_pos.len() != rect.area() {
            return false;
        }

        let Some(members) = rect
            .cells(self.field_cols)
            .map(|pos| by_pos.get(&pos).copied())
            .collect::<Option<Vec<_>>>()
        else {
            return false;
        };

        self.rect = rect;
        self.members = members;
        true
    }
}
