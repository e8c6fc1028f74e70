// Item store module
// In-memory, insertion-ordered storage for Item records

mod id;

pub use id::{IdGenerator, UuidGenerator};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// A single registry record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Create payload for an item; the identifier is always server-assigned
#[derive(Debug, Clone, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// In-memory item store.
///
/// Items live for the duration of the process and are never updated or
/// deleted. Access is serialized through an async `RwLock` so concurrent
/// handler invocations cannot race on the backing vector.
pub struct ItemStore {
    items: RwLock<Vec<Item>>,
    ids: Box<dyn IdGenerator>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::with_id_generator(Box::new(UuidGenerator))
    }

    /// Build a store with a custom identifier source.
    pub fn with_id_generator(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            ids,
        }
    }

    /// Assign a fresh identifier and append the item. Never fails.
    pub async fn add(&self, new: NewItem) -> Item {
        let item = Item {
            id: self.ids.generate(),
            name: new.name,
            description: new.description,
            price: new.price,
        };

        let mut items = self.items.write().await;
        items.push(item.clone());
        item
    }

    /// All items in insertion order; empty when nothing has been added.
    pub async fn list(&self) -> Vec<Item> {
        self.items.read().await.clone()
    }

    /// First item whose identifier matches `id`, if any. Linear scan.
    pub async fn get_by_id(&self, id: &str) -> Option<Item> {
        let items = self.items.read().await;
        items.iter().find(|item| item.id == id).cloned()
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    struct SequentialGenerator(AtomicU64);

    impl IdGenerator for SequentialGenerator {
        fn generate(&self) -> String {
            format!("item-{}", self.0.fetch_add(1, Ordering::SeqCst))
        }
    }

    fn payload(name: &str) -> NewItem {
        NewItem {
            name: name.to_string(),
            description: format!("{name} description"),
            price: 9.99,
        }
    }

    #[tokio::test]
    async fn test_add_assigns_unique_ids() {
        let store = ItemStore::new();
        let a = store.add(payload("a")).await;
        let b = store.add(payload("b")).await;

        assert!(!a.id.is_empty());
        assert!(!b.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_add_returns_stored_fields() {
        let store = ItemStore::with_id_generator(Box::new(SequentialGenerator(AtomicU64::new(1))));
        let item = store.add(payload("widget")).await;

        assert_eq!(item.id, "item-1");
        assert_eq!(item.name, "widget");
        assert_eq!(item.description, "widget description");
        assert!((item.price - 9.99).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let store = ItemStore::new();
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = ItemStore::with_id_generator(Box::new(SequentialGenerator(AtomicU64::new(1))));
        for name in ["first", "second", "third"] {
            store.add(payload(name)).await;
        }

        let items = store.list().await;
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].name, "first");
        assert_eq!(items[1].name, "second");
        assert_eq!(items[2].name, "third");
        assert_eq!(items[0].id, "item-1");
        assert_eq!(items[2].id, "item-3");
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let store = ItemStore::new();
        let added = store.add(payload("findme")).await;
        store.add(payload("other")).await;

        assert_eq!(store.get_by_id(&added.id).await, Some(added));
        assert_eq!(store.get_by_id("nonexistent").await, None);
    }
}
