//! Falling pair - the two gems under player control
//!
//! A pair is a pivot gem and a partner gem. The partner sits on one of the
//! four sides of the pivot (see [`Orientation`]). Moves never mutate the
//! field here: [`FallingPair::shifted`] and [`FallingPair::rotated`] compute
//! the next placement, and the engine relocates both gems if one exists.
//!
//! # Rotation kicks
//!
//! When the partner's target cell is blocked (occupied, off the field, or off
//! the pivot's row), the pivot is pushed one cell the opposite way and the
//! partner takes the pivot's old cell:
//!
//! | Target side | Pivot kicks |
//! |-------------|-------------|
//! | Right | left |
//! | Left | right |
//! | Top | down |
//! | Bottom | up |
//!
//! If the kick cell is blocked too, the rotation fails.

use crate::field::Field;
use crate::gem::GemId;
use crate::types::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FallingPair {
    pub pivot: GemId,
    pub partner: GemId,
    pub pivot_pos: usize,
    pub partner_pos: usize,
    pub orientation: Orientation,
}

impl FallingPair {
    /// A freshly spawned pair: partner directly below the pivot
    pub fn spawned(pivot: GemId, pivot_pos: usize, partner: GemId, partner_pos: usize) -> Self {
        Self {
            pivot,
            partner,
            pivot_pos,
            partner_pos,
            orientation: Orientation::Bottom,
        }
    }

    fn owns(&self, id: GemId) -> bool {
        id == self.pivot || id == self.partner
    }

    /// Placement after shifting `dc` columns, or `None` if either gem would
    /// leave its row or run into a foreign gem
    pub fn shifted(&self, field: &Field, dc: isize) -> Option<Self> {
        let free = |pos: usize| field.at(pos).map_or(true, |id| self.owns(id));

        let pivot_pos = field.step(self.pivot_pos, 0, dc).filter(|&pos| free(pos))?;
        let partner_pos = field.step(self.partner_pos, 0, dc).filter(|&pos| free(pos))?;

        Some(Self {
            pivot_pos,
            partner_pos,
            ..*self
        })
    }

    /// Placement after rotating the partner around the pivot, kicking the
    /// pivot if needed
    pub fn rotated(&self, field: &Field, clockwise: bool) -> Option<Self> {
        let orientation = if clockwise {
            self.orientation.rotate_cw()
        } else {
            self.orientation.rotate_ccw()
        };
        let (dr, dc) = orientation.delta();
        let open = |pos: &usize| field.is_empty(*pos);

        if let Some(partner_pos) = field.step(self.pivot_pos, dr, dc).filter(open) {
            return Some(Self {
                partner_pos,
                orientation,
                ..*self
            });
        }

        // Kick: the partner takes the pivot's cell
        let pivot_pos = field.step(self.pivot_pos, -dr, -dc).filter(open)?;
        Some(Self {
            pivot_pos,
            partner_pos: self.pivot_pos,
            orientation,
            ..*self
        })
    }
}
