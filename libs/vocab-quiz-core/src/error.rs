//! Error types for vocab-quiz-core.

use thiserror::Error;

use crate::types::ListId;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors that can occur while setting up or driving a quiz session.
///
/// None of these are fatal: the session stays where it was and the
/// message is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("select at least one list")]
    NoListSelected,

    #[error("list {0} is not selected")]
    ListNotSelected(ListId),

    #[error("no question data available for the selected lists")]
    NoQuestionData,

    #[error("cannot {action} while the quiz is {from}")]
    InvalidTransition { from: &'static str, action: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_transition() {
        let error = QuizError::InvalidTransition {
            from: "selecting",
            action: "restart",
        };
        assert_eq!(error.to_string(), "cannot restart while the quiz is selecting");
    }

    #[test]
    fn display_no_question_data() {
        assert_eq!(
            QuizError::NoQuestionData.to_string(),
            "no question data available for the selected lists"
        );
    }
}
