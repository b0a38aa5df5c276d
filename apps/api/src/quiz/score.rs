//! Per-browser running score.
//!
//! The counters live in the session record behind an opaque cookie id,
//! created lazily on the first quiz visit (or first submission, if the
//! client skips the quiz page) and expiring with the browser session.
//! Nothing is persisted across sessions.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::errors::AppError;

const SCORE_KEY: &str = "score";

/// Running tally of correct and total answers for one browser session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionScore {
    pub score: u32,
    pub total: u32,
}

impl SessionScore {
    /// Records one graded submission.
    pub fn record(&mut self, correct: bool) {
        self.total += 1;
        if correct {
            self.score += 1;
        }
    }
}

/// Returns the current counters, zeros when the session has none yet.
pub async fn load(session: &Session) -> Result<SessionScore, AppError> {
    Ok(session
        .get::<SessionScore>(SCORE_KEY)
        .await?
        .unwrap_or_default())
}

pub async fn save(session: &Session, score: SessionScore) -> Result<(), AppError> {
    session.insert(SCORE_KEY, score).await?;
    Ok(())
}

/// Lazily initializes the counters to 0/0 without clobbering an
/// existing tally. Called from the quiz entry point.
pub async fn init(session: &Session) -> Result<(), AppError> {
    if session.get::<SessionScore>(SCORE_KEY).await?.is_none() {
        session.insert(SCORE_KEY, SessionScore::default()).await?;
    }
    Ok(())
}
