//! Spawn-ordered resource arena.
//!
//! Resources are keyed by a monotonically increasing [`ResourceId`] that is
//! never reused, not even across restarts.  Anything holding an id (a
//! drone's claim, an output row) resolves it through the registry and gets
//! `None` once the resource is gone — there is no way to observe a stale
//! object.
//!
//! Iteration follows spawn order.  The nearest-resource query breaks ties by
//! first-encountered, so this order is part of the observable behavior.

use rustc_hash::FxHashMap;

use dh_core::{ResourceId, Vec3};

/// A collectible point object.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resource {
    pub id:       ResourceId,
    pub position: Vec3,
    /// `false` once a drone has picked it up.  An inactive resource stays in
    /// the registry until its carrier delivers it.
    pub active:   bool,
}

/// Arena of live resources.
#[derive(Debug, Default)]
pub struct ResourceRegistry {
    items:   FxHashMap<ResourceId, Resource>,
    /// Spawn order of the ids in `items`.
    order:   Vec<ResourceId>,
    next_id: u64,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an active resource at `position` and return its id.
    pub fn spawn(&mut self, position: Vec3) -> ResourceId {
        let id = ResourceId(self.next_id);
        self.next_id += 1;
        self.items.insert(id, Resource { id, position, active: true });
        self.order.push(id);
        id
    }

    #[inline]
    pub fn get(&self, id: ResourceId) -> Option<&Resource> {
        self.items.get(&id)
    }

    #[inline]
    pub fn contains(&self, id: ResourceId) -> bool {
        self.items.contains_key(&id)
    }

    /// Mark `id` inert.  Returns `false` if it is not present.
    pub fn deactivate(&mut self, id: ResourceId) -> bool {
        match self.items.get_mut(&id) {
            Some(r) => {
                r.active = false;
                true
            }
            None => false,
        }
    }

    /// Remove `id`, returning the record if it was present.
    pub fn remove(&mut self, id: ResourceId) -> Option<Resource> {
        let removed = self.items.remove(&id)?;
        if let Some(pos) = self.order.iter().position(|r| *r == id) {
            self.order.remove(pos);
        }
        Some(removed)
    }

    /// Destroy every resource.  Ids keep counting up.
    pub fn clear(&mut self) {
        self.items.clear();
        self.order.clear();
    }

    /// All resources (active or not) in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &Resource> + '_ {
        self.order.iter().filter_map(|id| self.items.get(id))
    }

    /// Resources that can still be claimed, in spawn order.
    pub fn available(&self) -> impl Iterator<Item = &Resource> + '_ {
        self.iter().filter(|r| r.active)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of active resources.
    pub fn available_count(&self) -> usize {
        self.items.values().filter(|r| r.active).count()
    }
}
