//! DynamoDB-backed record store.
//!
//! Single-table layout: every todo lives in one partition (`PK = "TODOS"`)
//! under `SK = "TODO#<id>"`, next to a counter item (`SK = "COUNTER"`)
//! whose `next_id` attribute assigns ids atomically.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;
use domain::{Todo, TodoDraft, UpdateMode};

use crate::{StoreError, StoreResult, TodoStore};

const PARTITION: &str = "TODOS";
const COUNTER_SK: &str = "COUNTER";

#[derive(Clone)]
pub struct DynamoStore {
    client: Client,
    table_name: String,
}

impl DynamoStore {
    pub async fn new(table_name: &str) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = Client::new(&config);
        Self {
            client,
            table_name: table_name.to_string(),
        }
    }

    fn sort_key(id: i64) -> String {
        format!("TODO#{id}")
    }

    /// Increments the counter item and returns the freshly assigned id.
    async fn next_id(&self) -> StoreResult<i64> {
        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(PARTITION.to_string()))
            .key("SK", AttributeValue::S(COUNTER_SK.to_string()))
            .update_expression("ADD next_id :one")
            .expression_attribute_values(":one", AttributeValue::N("1".to_string()))
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await
            .map_err(|e| backend_error(e.to_string()))?;

        result
            .attributes()
            .and_then(|attrs| attrs.get("next_id"))
            .and_then(|value| value.as_n().ok())
            .and_then(|n| n.parse().ok())
            .ok_or_else(|| backend_error("counter item returned no next_id".to_string()))
    }

    async fn get(&self, id: i64) -> StoreResult<Todo> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(PARTITION.to_string()))
            .key("SK", AttributeValue::S(Self::sort_key(id)))
            .send()
            .await
            .map_err(|e| backend_error(e.to_string()))?;

        let item = result.item().ok_or(StoreError::NotFound(id))?;
        item_to_todo(item).ok_or_else(|| backend_error(format!("malformed item for todo {id}")))
    }

    /// Writes the full record. With `must_exist` the write is rejected
    /// (surfacing `NotFound`) unless an item is already stored under the id.
    async fn put(&self, todo: &Todo, must_exist: bool) -> StoreResult<()> {
        let mut request = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .item("PK", AttributeValue::S(PARTITION.to_string()))
            .item("SK", AttributeValue::S(Self::sort_key(todo.id)))
            .item("id", AttributeValue::N(todo.id.to_string()));

        for (attr, value) in [
            ("name", &todo.name),
            ("description", &todo.description),
            ("photo", &todo.photo),
            ("dataCreate", &todo.data_create),
            ("dataUpdate", &todo.data_update),
        ] {
            if let Some(value) = value {
                request = request.item(attr, AttributeValue::S(value.clone()));
            }
        }

        if must_exist {
            request = request.condition_expression("attribute_exists(PK)");
        }

        request.send().await.map_err(|e| {
            let service_error = e.into_service_error();
            if service_error.is_conditional_check_failed_exception() {
                StoreError::NotFound(todo.id)
            } else {
                backend_error(service_error.to_string())
            }
        })?;

        Ok(())
    }

    /// Overwrites only the supplied fields with a single update expression.
    async fn merge(&self, id: i64, draft: TodoDraft) -> StoreResult<Todo> {
        let mut set_parts = Vec::new();
        let mut builder = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(PARTITION.to_string()))
            .key("SK", AttributeValue::S(Self::sort_key(id)))
            .condition_expression("attribute_exists(PK)")
            .return_values(ReturnValue::AllNew);

        for (attr, value) in [
            ("name", draft.name),
            ("description", draft.description),
            ("photo", draft.photo),
            ("dataCreate", draft.data_create),
            ("dataUpdate", draft.data_update),
        ] {
            if let Some(value) = value {
                set_parts.push(format!("#{attr} = :{attr}"));
                builder = builder
                    .expression_attribute_names(format!("#{attr}"), attr)
                    .expression_attribute_values(format!(":{attr}"), AttributeValue::S(value));
            }
        }

        if set_parts.is_empty() {
            // An empty patch changes nothing, but a missing id must still
            // surface as NotFound.
            return self.get(id).await;
        }

        let result = builder
            .update_expression(format!("SET {}", set_parts.join(", ")))
            .send()
            .await
            .map_err(|e| {
                let service_error = e.into_service_error();
                if service_error.is_conditional_check_failed_exception() {
                    StoreError::NotFound(id)
                } else {
                    backend_error(service_error.to_string())
                }
            })?;

        let item = result.attributes().ok_or(StoreError::NotFound(id))?;
        item_to_todo(item).ok_or_else(|| backend_error(format!("malformed item for todo {id}")))
    }
}

#[async_trait]
impl TodoStore for DynamoStore {
    async fn find_all(&self) -> StoreResult<Vec<Todo>> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression("PK = :pk AND begins_with(SK, :sk_prefix)")
            .expression_attribute_values(":pk", AttributeValue::S(PARTITION.to_string()))
            .expression_attribute_values(":sk_prefix", AttributeValue::S("TODO#".to_string()))
            .send()
            .await
            .map_err(|e| backend_error(e.to_string()))?;

        let todos = result.items().iter().filter_map(item_to_todo).collect();

        Ok(todos)
    }

    async fn create(&self, draft: TodoDraft) -> StoreResult<Todo> {
        let id = self.next_id().await?;
        let todo = Todo::from_draft(id, draft);
        self.put(&todo, false).await?;
        Ok(todo)
    }

    async fn update(&self, id: i64, draft: TodoDraft, mode: UpdateMode) -> StoreResult<Todo> {
        match mode {
            UpdateMode::Replace => {
                let todo = Todo::from_draft(id, draft);
                self.put(&todo, true).await?;
                Ok(todo)
            }
            UpdateMode::Merge => self.merge(id, draft).await,
        }
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(PARTITION.to_string()))
            .key("SK", AttributeValue::S(Self::sort_key(id)))
            .condition_expression("attribute_exists(PK)")
            .send()
            .await
            .map_err(|e| {
                let service_error = e.into_service_error();
                if service_error.is_conditional_check_failed_exception() {
                    StoreError::NotFound(id)
                } else {
                    backend_error(service_error.to_string())
                }
            })?;

        Ok(())
    }
}

fn backend_error(cause: String) -> StoreError {
    tracing::error!(error = %cause, "DynamoDB call failed");
    StoreError::Backend(cause)
}

fn item_to_todo(item: &HashMap<String, AttributeValue>) -> Option<Todo> {
    Some(Todo {
        id: item.get("id")?.as_n().ok()?.parse().ok()?,
        name: string_attr(item, "name"),
        description: string_attr(item, "description"),
        photo: string_attr(item, "photo"),
        data_create: string_attr(item, "dataCreate"),
        data_update: string_attr(item, "dataUpdate"),
    })
}

fn string_attr(item: &HashMap<String, AttributeValue>, attr: &str) -> Option<String> {
    item.get(attr).and_then(|value| value.as_s().ok()).cloned()
}
