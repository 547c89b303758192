//! Gravity and the resolution loop
//!
//! After the moves of an instruction, the field is resolved to a fixed point.
//! Each phase below either changes the field (a snapshot is taken and the
//! loop restarts from crash) or reports no change and hands over to the next:
//!
//! | Phase | Effect |
//! |-------|--------|
//! | crash | a crash gem destroys its connected same-color group of 2 or more |
//! | rainbow | a landed rainbow destroys every gem of the color beneath it |
//! | form | a 2x2 block of loose simple gems becomes a power gem |
//! | land | gravity passes until nothing moves |
//! | expand | power gems absorb full strips of matching gems |
//! | merge | power gems sharing a full edge become one |
//!
//! All scans run in ascending cell order except gravity, which runs from the
//! bottom row up so nothing moves twice in one pass.

use std::collections::BTreeSet;

use super::Game;
use crate::diagnostics::Diagnostic;
use crate::gem::{Gem, GemId};
use crate::power_gem::{Edge, PowerGem, PowerGemId};
use crate::snapshot::History;
use crate::types::{GemColor, GemKind};

/// What a rainbow chain rests on
enum Support {
    Floor,
    Air,
    Gem(Option<GemColor>),
}

impl Game {
    /// Run crash, rainbow, form, land, expand and merge until none applies
    pub(crate) fn resolve(&mut self, history: &mut History) {
        loop {
            if self.crash_phase() {
                history.push(self.snapshot());
                continue;
            }
            if self.rainbow_phase() {
                history.push(self.snapshot());
                continue;
            }
            if self.form_phase() {
                history.push(self.snapshot());
                continue;
            }
            if self.land(history) {
                continue;
            }
            if self.expand_phase() {
                history.push(self.snapshot());
                continue;
            }
            if self.merge_phase() {
                history.push(self.snapshot());
                continue;
            }
            break;
        }
    }

    /// Gravity passes until one moves nothing, one snapshot per pass
    pub(crate) fn land(&mut self, history: &mut History) -> bool {
        let mut landed = false;
        while self.gravity_pass() {
            landed = true;
            history.push(self.snapshot());
        }
        landed
    }

    /// Drop every unsupported gem by one row
    ///
    /// Loose gems fall into an empty cell below. A power gem falls only when
    /// the whole row under it is empty, and is handled once per pass.
    /// Returns true if anything moved. Exposed for tests that check the
    /// field has settled.
    #[doc(hidden)]
    pub fn gravity_pass(&mut self) -> bool {
        let mut moved = false;
        let mut visited: BTreeSet<PowerGemId> = BTreeSet::new();

        for index in (0..self.field.len()).rev() {
            let Some(id) = self.field.at(index) else {
                continue;
            };
            match self.gems.get(&id).and_then(Gem::parent) {
                None => {
                    let Some(below) = self.field.below(index) else {
                        continue;
                    };
                    if self.field.is_empty(below) && self.move_gem(id, index, below) {
                        moved = true;
                    }
                }
                Some(pg) => {
                    if visited.insert(pg) && self.descend_power_gem(pg) {
                        moved = true;
                    }
                }
            }
        }
        moved
    }

    fn move_gem(&mut self, id: GemId, from: usize, to: usize) -> bool {
        if !self.field.move_cell(from, to) {
            return false;
        }
        if let Some(gem) = self.gems.get_mut(&id) {
            gem.set_pos(to);
        }
        true
    }

    fn descend_power_gem(&mut self, id: PowerGemId) -> bool {
        let Some(pg) = self.power_gems.get(&id) else {
            return false;
        };
        let rect = pg.rect();
        let cols = self.field.cols();

        let floor_row = rect.top + rect.height;
        let blocked = (rect.left..rect.left + rect.width).any(|col| {
            self.field
                .index_of(floor_row, col)
                .map_or(true, |i| !self.field.is_empty(i))
        });
        if blocked {
            return false;
        }

        // Bottom row first, so each member drops into a vacated cell
        let members: Vec<(GemId, usize)> = pg.members_with_positions().collect();
        for &(gem, pos) in members.iter().rev() {
            self.move_gem(gem, pos, pos + cols);
        }
        if let Some(pg) = self.power_gems.get_mut(&id) {
            pg.descend();
        }
        true
    }

    fn color_at(&self, pos: usize) -> Option<GemColor> {
        self.gem_at(pos).and_then(Gem::color)
    }

    /// Color of the loose simple gem at `pos`
    fn simple_color_at(&self, pos: usize) -> Option<GemColor> {
        self.gem_at(pos).filter(|gem| gem.is_simple()).and_then(Gem::color)
    }

    /// Cells 4-connected to `start` through gems of `color`
    pub(crate) fn connected_group(&self, start: usize, color: GemColor) -> BTreeSet<usize> {
        let mut group = BTreeSet::from([start]);
        let mut stack = vec![start];
        while let Some(pos) = stack.pop() {
            for next in self.field.neighbors(pos) {
                if !group.contains(&next) && self.color_at(next) == Some(color) {
                    group.insert(next);
                    stack.push(next);
                }
            }
        }
        group
    }

    fn crash_phase(&mut self) -> bool {
        let crash_gems: Vec<(usize, GemColor)> = self
            .field
            .occupied()
            .filter_map(|(pos, id)| match self.gems.get(&id)?.kind() {
                GemKind::Crash(color) => Some((pos, color)),
                _ => None,
            })
            .collect();

        for (pos, color) in crash_gems {
            let group = self.connected_group(pos, color);
            if group.len() > 1 {
                self.destroy(group);
                return true;
            }
        }
        false
    }

    fn rainbow_phase(&mut self) -> bool {
        let rainbows: Vec<usize> = self
            .field
            .occupied()
            .filter(|&(_, id)| self.gems.get(&id).is_some_and(Gem::is_rainbow))
            .map(|(pos, _)| pos)
            .collect();

        for start in rainbows {
            let mut chain = vec![start];
            let mut cursor = start;
            let support = loop {
                let Some(below) = self.field.below(cursor) else {
                    break Support::Floor;
                };
                match self.gem_at(below) {
                    None => break Support::Air,
                    Some(gem) if gem.is_rainbow() => {
                        chain.push(below);
                        cursor = below;
                    }
                    Some(gem) => break Support::Gem(gem.color()),
                }
            };

            let mut doomed: BTreeSet<usize> = chain.into_iter().collect();
            match support {
                Support::Air => continue,
                Support::Floor => {}
                Support::Gem(color) => {
                    if let Some(color) = color {
                        let matching: Vec<usize> = self
                            .field
                            .occupied()
                            .map(|(pos, _)| pos)
                            .filter(|&pos| self.color_at(pos) == Some(color))
                            .collect();
                        doomed.extend(matching);
                    }
                }
            }
            self.destroy(doomed);
            return true;
        }
        false
    }

    fn form_phase(&mut self) -> bool {
        let candidates: Vec<usize> = self.field.occupied().map(|(pos, _)| pos).collect();

        for pos in candidates {
            let Some(color) = self.simple_color_at(pos) else {
                continue;
            };
            let block = [
                Some(pos),
                self.field.step(pos, 0, 1),
                self.field.step(pos, 1, 0),
                self.field.step(pos, 1, 1),
            ];
            let Some(block) = block.into_iter().collect::<Option<Vec<usize>>>() else {
                continue;
            };
            if !block.iter().all(|&cell| self.simple_color_at(cell) == Some(color)) {
                continue;
            }

            let members: Vec<(GemId, usize)> = block
                .iter()
                .filter_map(|&cell| self.field.at(cell).map(|id| (id, cell)))
                .collect();
            let id = PowerGemId::new(self.next_power_gem_id);
            match PowerGem::new(id, color, self.field.cols(), &members) {
                Ok(pg) => {
                    self.next_power_gem_id += 1;
                    self.adopt(pg);
                    self.grow(id, &[Edge::Right, Edge::Bottom]);
                    return true;
                }
                Err(error) => self.log(Diagnostic::FormationAborted {
                    instruction: self.instructions_run,
                    error,
                }),
            }
        }
        false
    }

    fn adopt(&mut self, pg: PowerGem) {
        let id = pg.id();
        for member in pg.members() {
            if let Some(gem) = self.gems.get_mut(member) {
                gem.set_parent(Some(id));
            }
        }
        self.power_gems.insert(id, pg);
    }

    /// Grow a power gem along each edge in turn, as far as it will go
    fn grow(&mut self, id: PowerGemId, edges: &[Edge]) -> bool {
        let rows = self.field.rows();
        let mut grew = false;

        for &edge in edges {
            loop {
                let Some(pg) = self.power_gems.get(&id) else {
                    return grew;
                };
                let color = pg.color();
                let Some(strip) = pg.edge_strip(edge, rows) else {
                    break;
                };
                let Some(gems) = strip
                    .iter()
                    .map(|&pos| {
                        let gem = self.field.at(pos)?;
                        (self.simple_color_at(pos) == Some(color)).then_some((gem, pos))
                    })
                    .collect::<Option<Vec<(GemId, usize)>>>()
                else {
                    break;
                };

                let expanded = self
                    .power_gems
                    .get_mut(&id)
                    .is_some_and(|pg| pg.expand(edge, &gems));
                if !expanded {
                    break;
                }
                for (gem, _) in &gems {
                    if let Some(gem) = self.gems.get_mut(gem) {
                        gem.set_parent(Some(id));
                    }
                }
                grew = true;
            }
        }
        grew
    }

    fn expand_phase(&mut self) -> bool {
        let order: Vec<PowerGemId> = self.power_gems().iter().map(|pg| pg.id()).collect();
        let mut grew = false;
        for id in order {
            if self.grow(id, &Edge::EXPANSION_ORDER) {
                grew = true;
            }
        }
        grew
    }

    /// Merge the first pair of power gems that share a full edge
    ///
    /// The later power gem (right of or below the earlier one) is absorbed and
    /// its id retired.
    fn merge_phase(&mut self) -> bool {
        let order: Vec<PowerGemId> = self.power_gems().iter().map(|pg| pg.id()).collect();

        for &a in &order {
            for &b in &order {
                let (Some(first), Some(second)) =
                    (self.power_gems.get(&a), self.power_gems.get(&b))
                else {
                    continue;
                };
                if !matches!(first.merge_edge(second), Some(Edge::Right | Edge::Bottom)) {
                    continue;
                }
                let Some(absorbed) = self.power_gems.remove(&b) else {
                    continue;
                };
                let merged = self
                    .power_gems
                    .get_mut(&a)
                    .is_some_and(|pg| pg.merge(&absorbed));
                if merged {
                    for member in absorbed.members() {
                        if let Some(gem) = self.gems.get_mut(member) {
                            gem.set_parent(Some(a));
                        }
                    }
                    return true;
                }
                self.power_gems.insert(b, absorbed);
            }
        }
        false
    }

    /// Remove the gems at `cells` from the field and the gem table
    ///
    /// A power gem that loses any member is dissolved; members that survive
    /// become loose gems again.
    pub(crate) fn destroy(&mut self, cells: impl IntoIterator<Item = usize>) {
        let mut touched: BTreeSet<PowerGemId> = BTreeSet::new();
        for pos in cells {
            let Some(id) = self.field.take(pos) else {
                continue;
            };
            if let Some(parent) = self.gems.remove(&id).and_then(|gem| gem.parent()) {
                touched.insert(parent);
            }
        }

        for id in touched {
            let Some(pg) = self.power_gems.remove(&id) else {
                continue;
            };
            for member in pg.members() {
                if let Some(gem) = self.gems.get_mut(member) {
                    gem.set_parent(None);
                }
            }
        }
    }
}
