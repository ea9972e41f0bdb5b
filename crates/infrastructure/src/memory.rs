//! In-memory record store.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use domain::{Todo, TodoDraft, UpdateMode};
use tokio::sync::RwLock;

use crate::{StoreError, StoreResult, TodoStore};

/// Ordered in-memory store. Contents are lost when the process exits.
///
/// Lookup is a linear scan; the data set is assumed demo-scale. Ids come
/// from an atomic counter, so concurrent creates still get distinct ids.
#[derive(Debug)]
pub struct MemoryStore {
    items: RwLock<Vec<Todo>>,
    next_id: AtomicI64,
}

impl MemoryStore {
    /// Creates an empty store; the first assigned id is 1.
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn find_all(&self) -> StoreResult<Vec<Todo>> {
        let items = self.items.read().await;
        Ok(items.clone())
    }

    async fn create(&self, draft: TodoDraft) -> StoreResult<Todo> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let todo = Todo::from_draft(id, draft);
        let mut items = self.items.write().await;
        items.push(todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: i64, draft: TodoDraft, mode: UpdateMode) -> StoreResult<Todo> {
        let mut items = self.items.write().await;
        match items.iter_mut().find(|todo| todo.id == id) {
            Some(existing) => {
                existing.apply(draft, mode);
                Ok(existing.clone())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut items = self.items.write().await;
        match items.iter().position(|todo| todo.id == id) {
            Some(index) => {
                items.remove(index);
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }
}
