//! Gem module - single-cell gems and their ids

use crate::power_gem::PowerGemId;
use crate::types::{GemColor, GemKind};

/// Stable id of a gem, allocated in spawn order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GemId(u32);

impl GemId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u32 {
        self.0
    }
}

/// A live gem on the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gem {
    id: GemId,
    kind: GemKind,
    pos: usize,
    /// Owning power gem, if any (lookup only, the power gem owns the relation)
    parent: Option<PowerGemId>,
}

impl Gem {
    pub fn new(id: GemId, kind: GemKind, pos: usize) -> Self {
        Self {
            id,
            kind,
            pos,
            parent: None,
        }
    }

    pub fn id(&self) -> GemId {
        self.id
    }

    pub fn kind(&self) -> GemKind {
        self.kind
    }

    /// Single-character code shown in text dumps
    pub fn code(&self) -> char {
        self.kind.code()
    }

    pub fn color(&self) -> Option<GemColor> {
        self.kind.color()
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn parent(&self) -> Option<PowerGemId> {
        self.parent
    }

    pub fn is_crash(&self) -> bool {
        self.kind.is_crash()
    }

    pub fn is_rainbow(&self) -> bool {
        self.kind.is_rainbow()
    }

    /// Plain colored gem that no power gem owns yet
    pub fn is_simple(&self) -> bool {
        self.parent.is_none() && matches!(self.kind, GemKind::Simple(_))
    }

    /// Simple, unowned and of the given color
    pub fn is_simple_of(&self, color: GemColor) -> bool {
        self.is_simple() && self.color() == Some(color)
    }

    pub(crate) fn set_pos(&mut self, pos: usize) {
        self.pos = pos;
    }

    pub(crate) fn set_parent(&mut self, parent: Option<PowerGemId>) {
        self.parent = parent;
    }
}
