//! Quiz session state machine.
//!
//! A session starts in [`QuizState::Selecting`], where lists are picked and
//! a source column chosen per list. Starting builds a deck and moves to
//! [`QuizState::InProgress`]; answering the last question moves to
//! [`QuizState::Finished`], from which the same selection can be restarted
//! with a fresh shuffle.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::deck::build_deck_with;
use crate::error::{QuizError, Result};
use crate::matching::{check_answer, MatchResult};
use crate::types::{DeckSource, ListId, Question, VocabList};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizState {
    Selecting,
    InProgress,
    Finished,
}

impl QuizState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Selecting => "selecting",
            Self::InProgress => "in_progress",
            Self::Finished => "finished",
        }
    }
}

/// The raw answer given for one question and its verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub given: String,
    pub is_correct: bool,
}

/// What the caller learns after submitting an answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub question: Question,
    pub result: MatchResult,
    pub score: usize,
    pub finished: bool,
}

/// One row of the end-of-quiz review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewItem {
    pub question: Question,
    pub given: String,
    pub is_correct: bool,
}

/// Summary of a finished session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizReport {
    pub score: usize,
    pub total: usize,
    /// Rounded share of correct answers, 0 to 100.
    pub percent: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
    pub items: Vec<ReviewItem>,
}

/// In-memory quiz session. Owns its deck and answer record exclusively.
#[derive(Debug, Clone)]
pub struct QuizSession {
    state: QuizState,
    selected: Vec<ListId>,
    source_choice: BTreeMap<ListId, String>,
    sources: Vec<DeckSource>,
    deck: Vec<Question>,
    current: usize,
    score: usize,
    answers: Vec<AnswerRecord>,
    last_error: Option<String>,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            state: QuizState::Selecting,
            selected: Vec::new(),
            source_choice: BTreeMap::new(),
            sources: Vec::new(),
            deck: Vec::new(),
            current: 0,
            score: 0,
            answers: Vec::new(),
            last_error: None,
            started_at: None,
            finished_at: None,
        }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    /// Selected list ids, in the order they were picked.
    pub fn selected_lists(&self) -> &[ListId] {
        &self.selected
    }

    pub fn preferred_source(&self, list_id: ListId) -> Option<&str> {
        self.source_choice.get(&list_id).map(String::as_str)
    }

    /// Add a list to the selection, or remove it if already selected.
    ///
    /// Returns whether the list is selected afterwards. Removing a list
    /// forgets its source choice.
    pub fn toggle_list(&mut self, list_id: ListId) -> Result<bool> {
        self.require(QuizState::Selecting, "change the selection")?;

        if let Some(pos) = self.selected.iter().position(|id| *id == list_id) {
            self.selected.remove(pos);
            self.source_choice.remove(&list_id);
            Ok(false)
        } else {
            self.selected.push(list_id);
            Ok(true)
        }
    }

    /// Choose the source column for a selected list by name.
    pub fn set_source(&mut self, list_id: ListId, column_name: impl Into<String>) -> Result<()> {
        self.require(QuizState::Selecting, "change the selection")?;
        if !self.selected.contains(&list_id) {
            return Err(QuizError::ListNotSelected(list_id));
        }
        self.source_choice.insert(list_id, column_name.into());
        Ok(())
    }

    /// Fail with `NoListSelected`, recording the message, when nothing is
    /// selected. Lets callers bail out before fetching any data.
    pub fn ensure_selection(&mut self) -> Result<()> {
        if self.selected.is_empty() {
            let error = QuizError::NoListSelected;
            self.last_error = Some(error.to_string());
            return Err(error);
        }
        Ok(())
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Record a failure that happened before a deck could be built, such as
    /// the backend being unreachable. The state does not change.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    /// Start with the thread-local RNG. See [`QuizSession::start_with`].
    pub fn start(&mut self, lists: Vec<VocabList>) -> Result<usize> {
        self.start_with(lists, &mut rand::thread_rng())
    }

    /// Build a deck from the fetched lists and begin asking.
    ///
    /// Only lists in the current selection are used, in selection order.
    /// On error the session stays in `Selecting` with the message recorded.
    /// Returns the number of questions in the deck.
    pub fn start_with<R: Rng + ?Sized>(
        &mut self,
        lists: Vec<VocabList>,
        rng: &mut R,
    ) -> Result<usize> {
        self.require(QuizState::Selecting, "start")?;
        self.ensure_selection()?;

        let result = self.begin(lists, rng);
        if let Err(e) = &result {
            self.last_error = Some(e.to_string());
        }
        result
    }

    fn begin<R: Rng + ?Sized>(&mut self, lists: Vec<VocabList>, rng: &mut R) -> Result<usize> {
        let mut by_id: BTreeMap<ListId, VocabList> =
            lists.into_iter().map(|list| (list.id, list)).collect();
        let sources: Vec<DeckSource> = self
            .selected
            .iter()
            .filter_map(|id| by_id.remove(id))
            .map(|list| {
                let preferred = self.source_choice.get(&list.id).cloned();
                DeckSource::new(list, preferred)
            })
            .collect();

        let deck = build_deck_with(&sources, rng);
        if deck.is_empty() {
            return Err(QuizError::NoQuestionData);
        }

        self.sources = sources;
        self.begin_deck(deck);
        Ok(self.deck.len())
    }

    /// Restart with the thread-local RNG. See [`QuizSession::restart_with`].
    pub fn restart(&mut self) -> Result<usize> {
        self.restart_with(&mut rand::thread_rng())
    }

    /// Reshuffle the same selection into a new deck and start over.
    /// Only valid once the session is finished.
    pub fn restart_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize> {
        self.require(QuizState::Finished, "restart")?;

        let deck = build_deck_with(&self.sources, rng);
        if deck.is_empty() {
            return Err(QuizError::NoQuestionData);
        }
        self.begin_deck(deck);
        Ok(self.deck.len())
    }

    /// Drop the deck and all progress, keeping the selection.
    pub fn reset(&mut self) {
        let selected = std::mem::take(&mut self.selected);
        let source_choice = std::mem::take(&mut self.source_choice);
        *self = Self {
            selected,
            source_choice,
            ..Self::new()
        };
    }

    /// Grade an answer to the current question and advance.
    ///
    /// Returns `None` unless a quiz is in progress.
    pub fn submit(&mut self, answer: &str) -> Option<AnswerOutcome> {
        if self.state != QuizState::InProgress {
            return None;
        }
        let question = self.deck.get(self.current)?.clone();

        let result = check_answer(answer, &question.answer);
        if result.is_correct {
            self.score += 1;
        }
        self.answers.push(AnswerRecord {
            given: answer.to_string(),
            is_correct: result.is_correct,
        });

        self.current += 1;
        if self.current >= self.deck.len() {
            self.state = QuizState::Finished;
            self.finished_at = Some(Utc::now());
        }

        Some(AnswerOutcome {
            question,
            result,
            score: self.score,
            finished: self.state == QuizState::Finished,
        })
    }

    /// The question waiting for an answer, if a quiz is in progress.
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            QuizState::InProgress => self.deck.get(self.current),
            _ => None,
        }
    }

    /// Zero-based index of the current question.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn deck(&self) -> &[Question] {
        &self.deck
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    /// Review of every question once the session is finished.
    pub fn report(&self) -> Option<QuizReport> {
        if self.state != QuizState::Finished {
            return None;
        }

        let total = self.deck.len();
        let percent = if total == 0 {
            0
        } else {
            ((self.score as f64 / total as f64) * 100.0).round() as u32
        };

        let items = self
            .deck
            .iter()
            .zip(&self.answers)
            .map(|(question, answer)| ReviewItem {
                question: question.clone(),
                given: answer.given.clone(),
                is_correct: answer.is_correct,
            })
            .collect();

        Some(QuizReport {
            score: self.score,
            total,
            percent,
            started_at: self.started_at,
            finished_at: self.finished_at,
            items,
        })
    }

    fn begin_deck(&mut self, deck: Vec<Question>) {
        self.deck = deck;
        self.current = 0;
        self.score = 0;
        self.answers.clear();
        self.last_error = None;
        self.started_at = Some(Utc::now());
        self.finished_at = None;
        self.state = QuizState::InProgress;
    }

    fn require(&self, expected: QuizState, action: &'static str) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(QuizError::InvalidTransition {
                from: self.state.as_str(),
                action,
            })
        }
    }
}
