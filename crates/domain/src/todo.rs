use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single todo record.
///
/// `id` is always assigned by the server; every other field is an
/// unvalidated pass-through. Fields that are `None` are omitted from the
/// JSON representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Todo {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(rename = "dataCreate", skip_serializing_if = "Option::is_none")]
    pub data_create: Option<String>,
    #[serde(rename = "dataUpdate", skip_serializing_if = "Option::is_none")]
    pub data_update: Option<String>,
}

/// Client-supplied todo fields, used for create and both update flavors.
///
/// There is deliberately no `id` field: ids come from the store, and an id
/// sent by a client is dropped along with any other unknown key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct TodoDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub photo: Option<String>,
    #[serde(rename = "dataCreate")]
    pub data_create: Option<String>,
    #[serde(rename = "dataUpdate")]
    pub data_update: Option<String>,
}

/// Selects full-replace (PUT) or field-merge (PATCH) update semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// The record becomes exactly the draft; omitted fields are discarded.
    Replace,
    /// Only fields present in the draft overwrite the record.
    Merge,
}

impl Todo {
    /// Materializes a record from a draft under a store-assigned id.
    pub fn from_draft(id: i64, draft: TodoDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            photo: draft.photo,
            data_create: draft.data_create,
            data_update: draft.data_update,
        }
    }

    /// Overwrites only the fields the draft supplies.
    pub fn merge(&mut self, draft: TodoDraft) {
        if let Some(name) = draft.name {
            self.name = Some(name);
        }
        if let Some(description) = draft.description {
            self.description = Some(description);
        }
        if let Some(photo) = draft.photo {
            self.photo = Some(photo);
        }
        if let Some(data_create) = draft.data_create {
            self.data_create = Some(data_create);
        }
        if let Some(data_update) = draft.data_update {
            self.data_update = Some(data_update);
        }
    }

    /// Applies a draft with the given update semantics, keeping the id.
    pub fn apply(&mut self, draft: TodoDraft, mode: UpdateMode) {
        match mode {
            UpdateMode::Replace => *self = Todo::from_draft(self.id, draft),
            UpdateMode::Merge => self.merge(draft),
        }
    }
}
