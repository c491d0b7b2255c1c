//! Identity-keyed memo used for cycle detection.

use std::collections::HashMap;

use crate::identity::ObjectId;

/// Associative store keyed by node identity rather than by content.
///
/// Each top-level Equals or Compare call owns its own memo; sharing one
/// between unrelated calls would turn ordinary revisits into false cycles.
#[derive(Debug, Clone)]
pub struct IdentityMemo<V = ()> {
    entries: HashMap<ObjectId, V>,
}

impl<V> Default for IdentityMemo<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<V> IdentityMemo<V> {
    /// Create an empty memo.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `id` has an entry.
    pub fn has(&self, id: ObjectId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Get the entry recorded for `id`.
    pub fn get(&self, id: ObjectId) -> Option<&V> {
        self.entries.get(&id)
    }

    /// Mutable access to the entry recorded for `id`.
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut V> {
        self.entries.get_mut(&id)
    }

    /// Record `value` for `id`, replacing any previous entry.
    pub fn set(&mut self, id: ObjectId, value: V) {
        self.entries.insert(id, value);
    }

    /// Remove the entry for `id`.
    pub fn delete(&mut self, id: ObjectId) -> Option<V> {
        self.entries.remove(&id)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of identities with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no identity has an entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
