//! Record store trait definition.

use async_trait::async_trait;
use domain::{Todo, TodoDraft, UpdateMode};

use crate::StoreResult;

/// Contract shared by every record store implementation.
///
/// Not-found updates and deletes fail with [`crate::StoreError::NotFound`]
/// in every implementation; deleting a missing id is never a silent no-op.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Returns every stored todo.
    async fn find_all(&self) -> StoreResult<Vec<Todo>>;

    /// Stores a new todo, assigning the next id.
    async fn create(&self, draft: TodoDraft) -> StoreResult<Todo>;

    /// Updates the todo with the given id and returns the new record.
    async fn update(&self, id: i64, draft: TodoDraft, mode: UpdateMode) -> StoreResult<Todo>;

    /// Removes the todo with the given id.
    async fn delete(&self, id: i64) -> StoreResult<()>;
}
