use std::collections::HashMap;
use std::ops::RangeInclusive;

use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// Broad-phase spatial hash.
/// Maps discrete cell coordinates to the ids of every entity whose AABB
/// overlaps that cell. Rebuilt from scratch each tick; entities move
/// continuously, so incremental maintenance is not worth the complexity.
/// Queries may return false positives (filtered by the narrow phase) but
/// never miss a true overlap.
pub struct SpatialIndex {
    cell_size: f32,
    cells: HashMap<(i32, i32), Vec<EntityId>>,
}

impl SpatialIndex {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size: if cell_size > 0.0 { cell_size } else { 100.0 },
            cells: HashMap::new(),
        }
    }

    /// Clear the grid and reinsert every active entity into each cell its
    /// AABB spans.
    pub fn rebuild<'a>(&mut self, entities: impl Iterator<Item = &'a Entity>) {
        self.cells.clear();
        for entity in entities {
            if !entity.active {
                continue;
            }
            for cx in self.span(entity.left(), entity.right()) {
                for cy in self.span(entity.top(), entity.bottom()) {
                    self.cells.entry((cx, cy)).or_default().push(entity.id);
                }
            }
        }
    }

    /// All entities sharing a cell with the given entity, deduplicated and
    /// sorted by id, excluding the entity itself.
    pub fn query(&self, entity: &Entity) -> Vec<EntityId> {
        let mut out = Vec::new();
        for cx in self.span(entity.left(), entity.right()) {
            for cy in self.span(entity.top(), entity.bottom()) {
                if let Some(ids) = self.cells.get(&(cx, cy)) {
                    out.extend(ids.iter().copied().filter(|id| *id != entity.id));
                }
            }
        }
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Number of occupied cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn span(&self, min: f32, max: f32) -> RangeInclusive<i32> {
        let lo = (min / self.cell_size).floor() as i32;
        let hi = (max / self.cell_size).floor() as i32;
        lo..=hi
    }
}
