//! Quiz session commands.

use crate::api::{ApiError, VocabApi};
use crate::state::AppState;
use vocab_quiz_core::session::{AnswerOutcome, QuizReport, QuizSession, QuizState};
use vocab_quiz_core::types::{ListId, Question, VocabList};

use super::CommandError;

/// A selected list and its chosen source column.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SelectionView {
    pub list_id: ListId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// The current question without its answer.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct QuestionView {
    pub prompt: String,
    pub list_name: String,
    pub source_column: String,
    pub target_column: String,
}

impl From<&Question> for QuestionView {
    fn from(q: &Question) -> Self {
        Self {
            prompt: q.prompt.clone(),
            list_name: q.list_name.clone(),
            source_column: q.source_column.clone(),
            target_column: q.target_column.clone(),
        }
    }
}

/// Snapshot of the session for rendering.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct QuizStatus {
    pub state: QuizState,
    pub loading: bool,
    pub selection: Vec<SelectionView>,
    /// One-based position of the current question.
    pub position: usize,
    pub total: usize,
    pub score: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<QuestionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QuizStatus {
    fn of(session: &QuizSession, loading: bool) -> Self {
        let selection = session
            .selected_lists()
            .iter()
            .map(|id| SelectionView {
                list_id: *id,
                source: session.preferred_source(*id).map(str::to_string),
            })
            .collect();

        let total = session.deck().len();
        Self {
            state: session.state(),
            loading,
            selection,
            position: (session.current_index() + 1).min(total),
            total,
            score: session.score(),
            current: session.current_question().map(QuestionView::from),
            error: session.last_error().map(str::to_string),
        }
    }
}

/// Current session snapshot.
pub async fn quiz_status(state: &AppState) -> QuizStatus {
    let session = state.session.lock().await;
    QuizStatus::of(&session, state.is_loading())
}

/// Select a list, or deselect it if already selected.
pub async fn toggle_list(list_id: ListId, state: &AppState) -> Result<QuizStatus, CommandError> {
    let mut session = state.session.lock().await;
    session.toggle_list(list_id)?;
    Ok(QuizStatus::of(&session, state.is_loading()))
}

/// Choose which column of a list is shown as the prompt.
pub async fn choose_source(
    list_id: ListId,
    column_name: String,
    state: &AppState,
) -> Result<QuizStatus, CommandError> {
    let mut session = state.session.lock().await;
    session.set_source(list_id, column_name)?;
    Ok(QuizStatus::of(&session, state.is_loading()))
}

/// Fetch the selected lists and start a quiz.
///
/// The session lock is not held while fetching. On any failure the session
/// stays in `selecting` with the error recorded.
pub async fn start_quiz(state: &AppState) -> Result<QuizStatus, CommandError> {
    let selected = {
        let mut session = state.session.lock().await;
        if session.state() != QuizState::Selecting {
            return Err(CommandError::new(format!(
                "cannot start while the quiz is {}",
                session.state().as_str()
            )));
        }
        session.ensure_selection()?;
        session.selected_lists().to_vec()
    };

    tracing::info!(lists = selected.len(), "loading vocabulary for quiz");
    let fetched = {
        let _loading = state.begin_loading();
        fetch_lists(&state.api, &selected).await
    };

    let mut session = state.session.lock().await;
    match fetched {
        Ok(lists) => {
            let total = session.start(lists)?;
            tracing::info!(questions = total, "quiz started");
            Ok(QuizStatus::of(&session, false))
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not load vocabulary");
            session.fail(format!("could not load vocabulary: {}", e));
            Err(e.into())
        }
    }
}

/// Grade an answer to the current question.
///
/// `None` when no quiz is in progress; nothing changes in that case.
pub async fn submit_answer(
    answer: String,
    state: &AppState,
) -> Result<Option<AnswerOutcome>, CommandError> {
    let mut session = state.session.lock().await;
    let outcome = session.submit(&answer);

    if let Some(outcome) = &outcome {
        tracing::debug!(
            correct = outcome.result.is_correct,
            distance = outcome.result.distance,
            allowed = outcome.result.allowed_distance,
            "graded answer"
        );
        if outcome.finished {
            tracing::info!(score = outcome.score, total = session.deck().len(), "quiz finished");
        }
    }

    Ok(outcome)
}

/// Start the same selection over with a fresh shuffle.
pub async fn restart_quiz(state: &AppState) -> Result<QuizStatus, CommandError> {
    let mut session = state.session.lock().await;
    let total = session.restart()?;
    tracing::info!(questions = total, "quiz restarted");
    Ok(QuizStatus::of(&session, state.is_loading()))
}

/// Abandon the current quiz and go back to list selection.
pub async fn reset_quiz(state: &AppState) -> QuizStatus {
    let mut session = state.session.lock().await;
    session.reset();
    QuizStatus::of(&session, state.is_loading())
}

/// Results of a finished quiz.
pub async fn quiz_report(state: &AppState) -> Result<QuizReport, CommandError> {
    let session = state.session.lock().await;
    session
        .report()
        .ok_or_else(|| CommandError::new("the quiz is not finished yet"))
}

async fn fetch_lists(api: &VocabApi, ids: &[ListId]) -> Result<Vec<VocabList>, ApiError> {
    let mut lists = Vec::with_capacity(ids.len());
    for id in ids {
        lists.push(api.fetch_list(*id).await?);
    }
    Ok(lists)
}
