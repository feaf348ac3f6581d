//! Favorites registry.
//!
//! The set of products the user has hearted, shared by every screen that
//! shows a heart button or the favorites tab. The registry lives only in
//! memory and starts empty on every launch.
//!
//! All operations are total: duplicate adds and removals of unknown ids are
//! silent no-ops. Each call completes before returning, so a `contains`
//! issued right after an `add` or `remove` always sees its effect.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tokio::sync::watch;

use coffee_shop_core::{Coffee, ProductId};

use crate::error::add_breadcrumb;

/// In-memory favorites, unique by product id, in insertion order.
#[derive(Debug)]
pub struct FavoritesRegistry {
    items: RwLock<Vec<Coffee>>,
    revision: watch::Sender<u64>,
}

impl Default for FavoritesRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FavoritesRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            items: RwLock::new(Vec::new()),
            revision,
        }
    }

    /// Add a product, stored with `is_favorite` set.
    ///
    /// No-op if a product with the same id is already present.
    pub fn add(&self, coffee: Coffee) {
        let id = coffee.id.clone();
        {
            let mut items = self.write();
            if items.iter().any(|item| item.id == id) {
                return;
            }
            items.push(coffee.with_favorite(true));
        }
        tracing::debug!(product_id = %id, "Added favorite");
        add_breadcrumb(
            "favorites",
            "Added favorite",
            Some(&[("product_id", id.as_str())]),
        );
        self.bump();
    }

    /// Remove the product with `id`. No-op if absent.
    pub fn remove(&self, id: &ProductId) {
        {
            let mut items = self.write();
            let before = items.len();
            items.retain(|item| &item.id != id);
            if items.len() == before {
                return;
            }
        }
        tracing::debug!(product_id = %id, "Removed favorite");
        add_breadcrumb(
            "favorites",
            "Removed favorite",
            Some(&[("product_id", id.as_str())]),
        );
        self.bump();
    }

    /// Flip membership for `coffee`, returning whether it is now a favorite.
    pub fn toggle(&self, coffee: Coffee) -> bool {
        if self.contains(&coffee.id) {
            self.remove(&coffee.id);
            false
        } else {
            self.add(coffee);
            true
        }
    }

    /// Whether a product with `id` is a favorite.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.read().iter().any(|item| &item.id == id)
    }

    /// Snapshot of all favorites in insertion order.
    ///
    /// The returned vector is a copy; changing it does not touch the registry.
    #[must_use]
    pub fn list(&self) -> Vec<Coffee> {
        self.read().clone()
    }

    /// Number of favorites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether there are no favorites.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Receiver that is notified whenever the contents change.
    ///
    /// The value is a revision counter; views re-read [`list`](Self::list)
    /// when it moves.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn bump(&self) {
        self.revision.send_modify(|rev| *rev = rev.wrapping_add(1));
    }

    // A panic while holding the lock cannot leave the Vec half-updated, so a
    // poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Coffee>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Coffee>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }
}
