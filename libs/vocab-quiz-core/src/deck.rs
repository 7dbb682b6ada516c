//! Deck building: turns selected lists into one shuffled run of questions.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::schema::{resolve_source, target_columns};
use crate::types::{DeckSource, Question};

/// Build a deck with the thread-local RNG.
pub fn build_deck(sources: &[DeckSource]) -> Vec<Question> {
    build_deck_with(sources, &mut rand::thread_rng())
}

/// Build a deck from the given lists.
///
/// Each list contributes one question per (entry, target column) pair where
/// both the entry's source value and target value are non-blank. Entries are
/// shuffled per list, targets per entry, and the whole deck once more at the
/// end so lists are not grouped in blocks.
pub fn build_deck_with<R: Rng + ?Sized>(sources: &[DeckSource], rng: &mut R) -> Vec<Question> {
    let mut deck = Vec::new();

    for source in sources {
        deck.extend(list_questions(source, rng));
    }

    deck.shuffle(rng);
    deck
}

fn list_questions<R: Rng + ?Sized>(source: &DeckSource, rng: &mut R) -> Vec<Question> {
    let list = &source.list;
    let Some(source_column) = resolve_source(&list.columns, source.preferred_source.as_deref())
    else {
        return Vec::new();
    };
    let targets = target_columns(&list.columns, source_column);

    let mut entries: Vec<_> = list.entries.iter().collect();
    entries.shuffle(rng);

    let mut questions = Vec::new();
    for entry in entries {
        let prompt = entry.value(source_column.id);
        if prompt.is_empty() {
            continue;
        }

        let mut order = targets.clone();
        order.shuffle(rng);

        for target in order {
            let answer = entry.value(target.id);
            if answer.is_empty() {
                continue;
            }
            questions.push(Question {
                prompt: prompt.to_string(),
                answer: answer.to_string(),
                list_name: list.name.clone(),
                source_column: source_column.name.clone(),
                target_column: target.name.clone(),
            });
        }
    }

    questions
}
