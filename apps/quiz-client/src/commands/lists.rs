//! List browsing commands.

use crate::state::AppState;
use vocab_quiz_core::types::{Column, ListId, ListSummary};

use super::CommandError;

/// List every vocabulary list available to the user.
pub async fn list_vocab_lists(state: &AppState) -> Result<Vec<ListSummary>, CommandError> {
    state.api.list_vocab_lists().await.map_err(Into::into)
}

/// Columns of a list, for picking its source column.
pub async fn get_list_columns(
    list_id: ListId,
    state: &AppState,
) -> Result<Vec<Column>, CommandError> {
    let list = state.api.get_vocab_list(list_id).await?;
    Ok(list.columns)
}
