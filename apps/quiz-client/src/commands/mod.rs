//! Commands exposed to the front end.

pub mod lists;
pub mod quiz;

pub use lists::{get_list_columns, list_vocab_lists};
pub use quiz::{
    choose_source, quiz_report, quiz_status, reset_quiz, restart_quiz, start_quiz, submit_answer,
    toggle_list, QuestionView, QuizStatus, SelectionView,
};

/// Error returned by every command, ready to show to the user.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct CommandError {
    pub message: String,
}

impl CommandError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<crate::api::ApiError> for CommandError {
    fn from(e: crate::api::ApiError) -> Self {
        Self { message: e.to_string() }
    }
}

impl From<vocab_quiz_core::QuizError> for CommandError {
    fn from(e: vocab_quiz_core::QuizError) -> Self {
        Self { message: e.to_string() }
    }
}
