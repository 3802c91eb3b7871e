//! Identity map for persisted reviews
//!
//! Guarantees at most one in-memory Review per persisted primary key: every
//! row fetched from the database is routed through this cache before a
//! handle reaches the caller.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use appraise_core::Review;

/// Shared handle to one in-memory Review
pub type ReviewHandle = Rc<RefCell<Review>>;

/// Cache mapping persisted primary keys to their in-memory representative
///
/// HashMap-based and not thread-safe (no Arc/RwLock) - designed for
/// single-threaded use. Entries are never evicted; the map grows for the
/// life of the owning store.
#[derive(Debug, Clone, Default)]
pub struct IdentityMap {
    entries: HashMap<i64, ReviewHandle>,
}

impl IdentityMap {
    /// Create a new empty IdentityMap
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Get the cached handle for a primary key
    pub fn get(&self, id: i64) -> Option<ReviewHandle> {
        self.entries.get(&id).map(Rc::clone)
    }

    /// Register a handle under a primary key
    pub fn insert(&mut self, id: i64, handle: ReviewHandle) {
        self.entries.insert(id, handle);
    }

    /// Evict the entry for a primary key, returning it if present
    pub fn remove(&mut self, id: i64) -> Option<ReviewHandle> {
        self.entries.remove(&id)
    }

    /// Check if a primary key is registered
    pub fn contains(&self, id: i64) -> bool {
        self.entries.contains_key(&id)
    }

    /// Number of registered entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no entries are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry
    ///
    /// Handles held by callers stay alive; only the cache forgets them.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
