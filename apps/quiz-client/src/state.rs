//! Application state.

use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex as AsyncMutex;

use crate::api::VocabApi;
use vocab_quiz_core::QuizSession;

/// Global application state.
pub struct AppState {
    pub api: VocabApi,
    pub session: AsyncMutex<QuizSession>,
    loading: AtomicBool,
}

impl AppState {
    pub fn new(api: VocabApi) -> Self {
        Self {
            api,
            session: AsyncMutex::new(QuizSession::new()),
            loading: AtomicBool::new(false),
        }
    }

    /// True while vocabulary for a new quiz is being fetched.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Mark the state as loading until the returned guard is dropped.
    pub(crate) fn begin_loading(&self) -> LoadingGuard<'_> {
        self.loading.store(true, Ordering::Release);
        LoadingGuard { state: self }
    }
}

/// Clears the loading flag on drop, including when the owning future is
/// cancelled mid-fetch.
pub(crate) struct LoadingGuard<'a> {
    state: &'a AppState,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.loading.store(false, Ordering::Release);
    }
}
