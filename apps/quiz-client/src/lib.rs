//! Quiz client: fetches vocabulary from the backend and drives a quiz
//! session over [`vocab_quiz_core`].

pub mod api;
pub mod commands;
pub mod config;
pub mod state;

pub use api::{ApiError, VocabApi};
pub use commands::CommandError;
pub use config::{ClientConfig, ConfigError};
pub use state::AppState;
