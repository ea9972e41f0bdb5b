use std::sync::Arc;

use domain::{TodoDraft, UpdateMode};
use infrastructure::{MemoryStore, StoreError, TodoStore};

/// The handlers only ever see the store as a trait object, so the contract
/// is exercised the same way here.
fn setup_store() -> Arc<dyn TodoStore> {
    Arc::new(MemoryStore::new())
}

fn draft(name: &str, description: Option<&str>) -> TodoDraft {
    TodoDraft {
        name: Some(name.to_string()),
        description: description.map(str::to_string),
        ..Default::default()
    }
}

#[tokio::test]
async fn full_lifecycle_through_the_trait_object() {
    let store = setup_store();

    let created = store.create(draft("buy milk", Some("two liters"))).await.unwrap();
    assert!(created.id >= 1);

    let all = store.find_all().await.unwrap();
    assert_eq!(all, vec![created.clone()]);

    let patched = store
        .update(
            created.id,
            TodoDraft {
                photo: Some("milk.jpg".to_string()),
                ..Default::default()
            },
            UpdateMode::Merge,
        )
        .await
        .unwrap();
    assert_eq!(patched.name.as_deref(), Some("buy milk"));
    assert_eq!(patched.photo.as_deref(), Some("milk.jpg"));

    let replaced = store
        .update(created.id, draft("buy oat milk", None), UpdateMode::Replace)
        .await
        .unwrap();
    assert_eq!(replaced.id, created.id);
    assert_eq!(replaced.description, None);
    assert_eq!(replaced.photo, None);

    store.delete(created.id).await.unwrap();
    assert!(store.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_ids_fail_with_not_found_for_update_and_delete() {
    let store = setup_store();

    let update = store
        .update(7, draft("ghost", None), UpdateMode::Merge)
        .await;
    assert!(matches!(update, Err(StoreError::NotFound(7))));

    let delete = store.delete(7).await;
    assert!(matches!(delete, Err(StoreError::NotFound(7))));
}

#[tokio::test]
async fn concurrent_writers_do_not_lose_unrelated_records() {
    let store = setup_store();

    let keeper = store.create(draft("keeper", None)).await.unwrap();

    let mut handles = Vec::new();
    for n in 0..8 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            let created = store.create(draft(&format!("scratch-{n}"), None)).await.unwrap();
            store.delete(created.id).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let all = store.find_all().await.unwrap();
    assert_eq!(all, vec![keeper]);
}
