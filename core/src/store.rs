//! In-memory ordered store of todo items.
//!
//! Items keep insertion order. `latest_id` starts at the largest id present and
//! only ever grows, so ids are never handed out twice.

use crate::types::TodoItem;

#[derive(Debug, Clone, Default)]
pub struct TodoItemStore {
    items: Vec<TodoItem>,
    latest_id: u32,
}

impl TodoItemStore {
    pub fn new(items: Vec<TodoItem>) -> Self {
        let latest_id = items.iter().map(|item| item.id).max().unwrap_or(0);
        Self { items, latest_id }
    }

    /// The five fixed items a fresh service starts with.
    pub fn seeded() -> Self {
        Self::new(
            (1..=5)
                .map(|id| TodoItem {
                    id,
                    title: format!("Todo Item {id}"),
                    completed: true,
                })
                .collect(),
        )
    }

    pub fn latest_id(&self) -> u32 {
        self.latest_id
    }

    /// Allocate the next id, or `None` once `u32::MAX` has been handed out.
    pub fn next_id(&mut self) -> Option<u32> {
        self.latest_id = self.latest_id.checked_add(1)?;
        Some(self.latest_id)
    }

    pub fn push(&mut self, item: TodoItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn find(&self, id: u32) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn find_mut(&mut self, id: u32) -> Option<&mut TodoItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Remove the first item with `id`.
    pub fn remove(&mut self, id: u32) -> Option<TodoItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32) -> TodoItem {
        TodoItem {
            id,
            title: format!("Item {id}"),
            completed: false,
        }
    }

    #[test]
    fn seeded_store_has_five_completed_items() {
        let store = TodoItemStore::seeded();
        assert_eq!(store.len(), 5);
        assert_eq!(store.latest_id(), 5);
        assert!(store.items().iter().all(|item| item.completed));
        assert_eq!(store.items()[2].title, "Todo Item 3");
    }

    #[test]
    fn latest_id_starts_at_maximum_not_last() {
        let store = TodoItemStore::new(vec![item(4), item(9), item(2)]);
        assert_eq!(store.latest_id(), 9);
    }

    #[test]
    fn empty_store_starts_counting_at_one() {
        let mut store = TodoItemStore::default();
        assert!(store.is_empty());
        assert_eq!(store.next_id(), Some(1));
    }

    #[test]
    fn next_id_is_not_reused_after_removal() {
        let mut store = TodoItemStore::new(vec![item(1), item(2)]);
        let id = store.next_id().unwrap();
        store.push(item(id));
        assert_eq!(store.remove(id).map(|item| item.id), Some(3));
        assert_eq!(store.next_id(), Some(4));
    }

    #[test]
    fn next_id_stops_at_u32_max() {
        let mut store = TodoItemStore::new(vec![item(u32::MAX - 1)]);
        assert_eq!(store.next_id(), Some(u32::MAX));
        assert_eq!(store.next_id(), None);
        assert_eq!(store.next_id(), None);
        assert_eq!(store.latest_id(), u32::MAX);
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut store = TodoItemStore::new(vec![item(1), item(2), item(3)]);
        store.remove(2);
        let ids: Vec<u32> = store.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(store.remove(2).is_none());
    }
}
