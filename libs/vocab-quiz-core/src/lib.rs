//! Core vocabulary quiz engine shared by every front end.
//!
//! Provides:
//! - Source/target column resolution for user-defined list schemas
//! - Deck building with per-list and cross-list shuffling
//! - Answer matching for typed answers (normalization + Levenshtein tolerance)
//! - The quiz session state machine
//! - Shared types (VocabList, Column, Entry, Question)

pub mod deck;
pub mod error;
pub mod matching;
pub mod schema;
pub mod session;
pub mod types;

pub use deck::{build_deck, build_deck_with};
pub use error::{QuizError, Result};
pub use matching::{check_answer, grade, levenshtein_distance, normalize, tolerance, MatchResult};
pub use schema::{resolve_source, target_columns};
pub use session::{AnswerOutcome, AnswerRecord, QuizReport, QuizSession, QuizState, ReviewItem};
pub use types::{
    Column, ColumnId, DeckSource, Entry, EntryId, ListId, ListSummary, Question, VocabList,
};
