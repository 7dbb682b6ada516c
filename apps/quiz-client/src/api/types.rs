//! Wire types for the backend's JSON bodies.

use serde::Deserialize;
use std::collections::BTreeMap;

use vocab_quiz_core::types::{Column, ColumnId, Entry, EntryId, ListId, ListSummary, VocabList};

#[derive(Debug, Clone, Deserialize)]
pub struct ApiListSummary {
    pub id: ListId,
    pub name: String,
}

impl From<ApiListSummary> for ListSummary {
    fn from(list: ApiListSummary) -> Self {
        Self {
            id: list.id,
            name: list.name,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiColumn {
    pub id: ColumnId,
    pub name: String,
    #[serde(default)]
    pub is_primary: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiListDetail {
    pub id: ListId,
    pub name: String,
    #[serde(default)]
    pub columns: Vec<ApiColumn>,
}

impl ApiListDetail {
    pub fn into_list(self, entries: Vec<Entry>) -> VocabList {
        VocabList {
            id: self.id,
            name: self.name,
            columns: self
                .columns
                .into_iter()
                .map(|c| Column {
                    id: c.id,
                    name: c.name,
                    is_primary: c.is_primary.unwrap_or(false),
                })
                .collect(),
            entries,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiFieldValue {
    pub column_id: ColumnId,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiEntry {
    pub id: EntryId,
    #[serde(default)]
    pub field_values: Vec<ApiFieldValue>,
}

impl ApiEntry {
    /// Null values are dropped; blank ones are kept and filtered later.
    pub fn into_entry(self, list_id: ListId) -> Entry {
        let values: BTreeMap<ColumnId, String> = self
            .field_values
            .into_iter()
            .filter_map(|f| f.value.map(|v| (f.column_id, v)))
            .collect();

        Entry {
            id: self.id,
            list_id,
            values,
        }
    }
}
