//! Core types for the vocabulary quiz.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type ListId = i64;
pub type ColumnId = i64;
pub type EntryId = i64;

/// One schema slot of a list, e.g. "Term" or "French".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub name: String,
    #[serde(default)]
    pub is_primary: bool,
}

impl Column {
    pub fn new(id: ColumnId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_primary: false,
        }
    }

    pub fn primary(id: ColumnId, name: impl Into<String>) -> Self {
        Self {
            is_primary: true,
            ..Self::new(id, name)
        }
    }
}

/// One row of a list, holding a text value per column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub list_id: ListId,
    #[serde(default)]
    pub values: BTreeMap<ColumnId, String>,
}

impl Entry {
    pub fn new(id: EntryId, list_id: ListId) -> Self {
        Self {
            id,
            list_id,
            values: BTreeMap::new(),
        }
    }

    /// Builder-style setter, mostly for fixtures.
    pub fn with_value(mut self, column_id: ColumnId, value: impl Into<String>) -> Self {
        self.values.insert(column_id, value.into());
        self
    }

    /// Trimmed value for a column. Absent values read as "".
    pub fn value(&self, column_id: ColumnId) -> &str {
        self.values.get(&column_id).map(|v| v.trim()).unwrap_or("")
    }
}

/// Summary row returned when listing the user's vocabulary lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSummary {
    pub id: ListId,
    pub name: String,
}

/// A vocabulary list with its schema and data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabList {
    pub id: ListId,
    pub name: String,
    pub columns: Vec<Column>,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// A list as fed into the deck builder, with the user's source choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSource {
    pub list: VocabList,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_source: Option<String>,
}

impl DeckSource {
    pub fn new(list: VocabList, preferred_source: Option<String>) -> Self {
        Self {
            list,
            preferred_source,
        }
    }
}

/// A single flashcard prompt. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub answer: String,
    pub list_name: String,
    pub source_column: String,
    pub target_column: String,
}
