//! Typed metadata attached to declared items (commands, handlers).
//!
//! Metadata is registered once per item and type; lookups go straight to the
//! entry for that pair.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::hash::Hash;

pub struct MetadataRegistry<K> {
    entries: HashMap<(K, TypeId), Box<dyn Any + Send + Sync>>,
}

impl<K: Eq + Hash> MetadataRegistry<K> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Attaches `meta` to `key`. Returns the value it replaced, if any.
    pub fn register<M: Any + Send + Sync>(&mut self, key: K, meta: M) -> Option<M> {
        self.entries
            .insert((key, TypeId::of::<M>()), Box::new(meta))
            .and_then(|prev| prev.downcast::<M>().ok())
            .map(|prev| *prev)
    }

    pub fn get<M: Any>(&self, key: K) -> Option<&M> {
        self.entries
            .get(&(key, TypeId::of::<M>()))
            .and_then(|m| m.downcast_ref::<M>())
    }

    pub fn contains<M: Any>(&self, key: K) -> bool {
        self.get::<M>(key).is_some()
    }

    /// Applies `mapper` to the `M` registered for `key`.
    pub fn map<M: Any, R>(&self, key: K, mapper: impl FnOnce(&M) -> R) -> Option<R> {
        self.get::<M>(key).map(mapper)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash> Default for MetadataRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}
