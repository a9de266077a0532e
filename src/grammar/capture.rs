//! Capture stores for wildcard positions.
//!
//! Capturing nodes record the tokens that fall through to their wildcard child.
//! Stores live in an arena owned by the [`SyntaxTree`](super::SyntaxTree) and are
//! addressed by [`StoreId`]. Unifying two stores merges their entries and redirects
//! one id to the other, so every id handed out earlier keeps reading the same
//! logical list.

use std::fmt;
use tracing::warn;

/// Handle to a capture store inside a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoreId(pub(crate) usize);

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "store#{}", self.0)
    }
}

#[derive(Debug, Clone)]
enum Slot {
    Owned(Vec<String>),
    Merged(StoreId),
}

/// Arena of capture stores.
#[derive(Debug, Clone, Default)]
pub struct CaptureStores {
    slots: Vec<Slot>,
}

impl CaptureStores {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a new, empty store.
    pub fn create(&mut self) -> StoreId {
        self.slots.push(Slot::Owned(Vec::new()));
        StoreId(self.slots.len() - 1)
    }

    /// Returns true if `id` was allocated by this arena.
    pub fn contains(&self, id: StoreId) -> bool {
        id.0 < self.slots.len()
    }

    /// Follows merge redirects to the store that actually holds the entries.
    pub fn resolve(&self, id: StoreId) -> Option<StoreId> {
        let mut current = id;
        loop {
            match self.slots.get(current.0)? {
                Slot::Owned(_) => return Some(current),
                Slot::Merged(next) => current = *next,
            }
        }
    }

    /// Returns true if both ids refer to the same logical store.
    pub fn is_unified(&self, a: StoreId, b: StoreId) -> bool {
        match (self.resolve(a), self.resolve(b)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Appends a captured token.
    pub fn push(&mut self, id: StoreId, token: impl Into<String>) {
        let Some(root) = self.resolve(id) else {
            warn!("Dropping capture for unknown {id}");
            return;
        };
        if let Some(Slot::Owned(values)) = self.slots.get_mut(root.0) {
            values.push(token.into());
        }
    }

    /// Returns the captured values in capture order.
    ///
    /// Unknown ids read as empty.
    pub fn values(&self, id: StoreId) -> &[String] {
        match self.resolve(id).and_then(|root| self.slots.get(root.0)) {
            Some(Slot::Owned(values)) => values,
            _ => &[],
        }
    }

    /// Empties a store (and everything unified with it).
    pub fn clear(&mut self, id: StoreId) {
        if let Some(root) = self.resolve(id) {
            if let Some(Slot::Owned(values)) = self.slots.get_mut(root.0) {
                values.clear();
            }
        }
    }

    /// Unifies `child` into `parent`.
    ///
    /// The child's entries are appended after the parent's, then the child's id
    /// redirects to the parent's store. Returns the surviving store.
    pub fn unify(&mut self, parent: StoreId, child: StoreId) -> Option<StoreId> {
        let parent_root = self.resolve(parent)?;
        let child_root = self.resolve(child)?;
        if parent_root == child_root {
            return Some(parent_root);
        }

        let moved = match std::mem::replace(
            &mut self.slots[child_root.0],
            Slot::Merged(parent_root),
        ) {
            Slot::Owned(values) => values,
            Slot::Merged(_) => Vec::new(),
        };
        if let Slot::Owned(values) = &mut self.slots[parent_root.0] {
            values.extend(moved);
        }
        Some(parent_root)
    }

    /// Read-only view handed to executable actions.
    pub fn view(&self) -> Captures<'_> {
        Captures { stores: self }
    }
}

/// Read-only view over a tree's capture stores.
///
/// Actions receive this when they run; they read the store they were built
/// against by the [`StoreId`] they closed over.
#[derive(Debug, Clone, Copy)]
pub struct Captures<'a> {
    stores: &'a CaptureStores,
}

impl<'a> Captures<'a> {
    /// Values captured into `store`, in capture order.
    pub fn get(&self, store: StoreId) -> &'a [String] {
        self.stores.values(store)
    }

    /// The value captured at `index`, if any.
    pub fn nth(&self, store: StoreId, index: usize) -> Option<&'a str> {
        self.get(store).get(index).map(String::as_str)
    }

    /// Returns true if nothing has been captured into `store`.
    pub fn is_empty(&self, store: StoreId) -> bool {
        self.get(store).is_empty()
    }
}
