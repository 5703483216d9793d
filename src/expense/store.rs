use std::{collections::BTreeSet, fmt};

use tracing::{debug, warn};

use crate::{
    errors::Result,
    storage::StorageBackend,
    utils::persistence::{decode_items, encode_items},
};

use super::item::ExpenseItem;

/// Storage key the item list is kept under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "Items";

/// Observer invoked after every mutation with the change and the resulting items.
pub type StoreCallback = Box<dyn FnMut(&StoreEvent, &[ExpenseItem])>;

/// Change delivered to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// An item was appended at `index`.
    Added { index: usize },
    /// Items previously at `offsets` (ascending) were removed.
    Removed { offsets: Vec<usize> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Ordered, observable list of expenses mirrored to a storage backend.
///
/// The store loads its items once when opened and writes the whole list back
/// after each mutation. Neither loading nor writing can fail from the caller's
/// point of view: absent or undecodable data opens as an empty list, and
/// write failures are logged and otherwise ignored. Use [`ExpenseStore::try_persist`]
/// to observe write errors explicitly.
pub struct ExpenseStore {
    items: Vec<ExpenseItem>,
    storage: Box<dyn StorageBackend>,
    key: String,
    pretty: bool,
    observers: Vec<(SubscriptionId, StoreCallback)>,
    next_subscription: u64,
}

impl ExpenseStore {
    /// Opens the list stored under `key`, writing pretty-printed JSON.
    pub fn open<S>(storage: S, key: impl Into<String>) -> Self
    where
        S: StorageBackend + 'static,
    {
        Self::open_with(storage, key, true)
    }

    pub fn open_with<S>(storage: S, key: impl Into<String>, pretty: bool) -> Self
    where
        S: StorageBackend + 'static,
    {
        let key = key.into();
        let items = load_items(&storage, &key);
        debug!(key = %key, count = items.len(), "expense store opened");
        Self {
            items,
            storage: Box::new(storage),
            key,
            pretty,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn items(&self) -> &[ExpenseItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExpenseItem> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&ExpenseItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Sum of all amounts.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.amount).sum()
    }

    /// Appends `item` to the end of the list, persists, and notifies observers.
    pub fn add(&mut self, item: ExpenseItem) {
        let index = self.items.len();
        debug!(id = %item.id, index, "adding expense");
        self.items.push(item);
        self.commit(StoreEvent::Added { index });
    }

    /// Removes the items at `offsets`, keeping the survivors in order.
    ///
    /// Duplicate offsets collapse. Offsets past the end of the list are
    /// ignored. The list is persisted and observers notified even when nothing
    /// was removed. Returns the removed items in their former order.
    pub fn remove<I>(&mut self, offsets: I) -> Vec<ExpenseItem>
    where
        I: IntoIterator<Item = usize>,
    {
        let len = self.items.len();
        let offsets: BTreeSet<usize> = offsets.into_iter().collect();
        let (valid, ignored): (Vec<usize>, Vec<usize>) =
            offsets.into_iter().partition(|offset| *offset < len);
        if !ignored.is_empty() {
            warn!(?ignored, len, "ignoring out-of-range offsets");
        }

        let mut removed = Vec::with_capacity(valid.len());
        for offset in valid.iter().rev() {
            removed.push(self.items.remove(*offset));
        }
        removed.reverse();
        debug!(offsets = ?valid, "removed expenses");

        self.commit(StoreEvent::Removed { offsets: valid });
        removed
    }

    /// Registers `callback` to run after every mutation.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent, &[ExpenseItem]) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(callback)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Writes the full list to storage, surfacing any failure.
    pub fn try_persist(&self) -> Result<()> {
        let bytes = encode_items(&self.items, self.pretty)?;
        self.storage.write(&self.key, &bytes)
    }

    fn commit(&mut self, event: StoreEvent) {
        if let Err(err) = self.try_persist() {
            warn!(key = %self.key, error = %err, "failed to persist expenses");
        }
        for (_, callback) in self.observers.iter_mut() {
            callback(&event, &self.items);
        }
    }
}

impl fmt::Debug for ExpenseStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpenseStore")
            .field("key", &self.key)
            .field("items", &self.items)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<'a> IntoIterator for &'a ExpenseStore {
    type Item = &'a ExpenseItem;
    type IntoIter = std::slice::Iter<'a, ExpenseItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Missing or undecodable data loads as an empty list.
fn load_items(storage: &dyn StorageBackend, key: &str) -> Vec<ExpenseItem> {
    let bytes = match storage.read(key) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!(key, error = %err, "failed to read stored expenses");
            return Vec::new();
        }
    };
    match decode_items(&bytes) {
        Ok(items) => items,
        Err(err) => {
            warn!(key, error = %err, "stored expenses could not be decoded");
            Vec::new()
        }
    }
}
