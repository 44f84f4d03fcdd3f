use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// Slot arena owning every simulated entity.
/// Ids map to slot indices and stay valid for the entity's lifetime;
/// despawned slots are left empty rather than reused, and [`clear`]
/// advances the id sequence past the discarded slots, so a stale id can
/// never alias a newer entity. Sized for level-scale entity counts
/// (hundreds).
///
/// [`clear`]: EntityStore::clear
pub struct EntityStore {
    slots: Vec<Option<Entity>>,
    /// Id of slot 0. Advanced by `clear` so ids keep counting up across
    /// level reloads.
    base: u32,
}

impl EntityStore {
    pub fn new() -> Self {
        Self {
            slots: Vec::with_capacity(256),
            base: 0,
        }
    }

    fn index_of(&self, id: EntityId) -> Option<usize> {
        let idx = id.0.checked_sub(self.base)? as usize;
        (idx < self.slots.len()).then_some(idx)
    }

    /// Add an entity, assigning its id. Non-positive mass or size are
    /// configuration defects: they are replaced with the documented
    /// defaults and logged, never treated as fatal.
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = EntityId(self.base + self.slots.len() as u32);
        let mut entity = entity;
        entity.id = id;
        entity.prev_pos = entity.pos;
        if entity.mass <= 0.0 {
            log::warn!(
                "entity {} spawned with mass {}; defaulting to 1",
                id.0,
                entity.mass
            );
            entity.mass = 1.0;
        }
        if entity.size.x <= 0.0 || entity.size.y <= 0.0 {
            log::warn!(
                "entity {} spawned with size {:?}; defaulting non-positive components to 1",
                id.0,
                entity.size
            );
            entity.size.x = entity.size.x.max(1.0);
            entity.size.y = entity.size.y.max(1.0);
        }
        self.slots.push(Some(entity));
        id
    }

    /// Remove an entity by id, purging it from every remaining contact
    /// list in the same call so no dangling handle survives the tick.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.index_of(id)?;
        let removed = self.slots[idx].take()?;
        for entity in self.iter_mut() {
            entity.contacts.retain(|c| c.other != id);
        }
        Some(removed)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.slots[self.index_of(id)?].as_ref()
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        let idx = self.index_of(id)?;
        self.slots[idx].as_mut()
    }

    /// Mutable access to two distinct entities at once, for in-place pair
    /// resolution. Returns `None` if the ids are equal or either is gone.
    pub fn get_pair_mut(
        &mut self,
        a: EntityId,
        b: EntityId,
    ) -> Option<(&mut Entity, &mut Entity)> {
        let (ia, ib) = (self.index_of(a)?, self.index_of(b)?);
        if ia == ib {
            return None;
        }
        if ia < ib {
            let (lo, hi) = self.slots.split_at_mut(ib);
            match (lo[ia].as_mut(), hi[0].as_mut()) {
                (Some(x), Some(y)) => Some((x, y)),
                _ => None,
            }
        } else {
            let (lo, hi) = self.slots.split_at_mut(ia);
            match (hi[0].as_mut(), lo[ib].as_mut()) {
                (Some(x), Some(y)) => Some((x, y)),
                _ => None,
            }
        }
    }

    /// Iterate over live entities in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.slots.iter().filter_map(Option::as_ref)
    }

    /// Iterate over live entities mutably, in id order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.slots.iter_mut().filter_map(Option::as_mut)
    }

    /// Ids of all live entities, in order.
    pub fn ids(&self) -> Vec<EntityId> {
        self.iter().map(|e| e.id).collect()
    }

    /// Find the first entity with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.iter().find(|e| e.tag == tag)
    }

    /// Number of live entities.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all entities. Ids held from before the call stay dead: the
    /// id sequence continues past the discarded slots instead of
    /// restarting at zero.
    pub fn clear(&mut self) {
        self.base += self.slots.len() as u32;
        self.slots.clear();
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}
