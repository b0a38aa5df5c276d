use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::errors::AppError;
use crate::models::{Profession, QuestionPrompt};
use crate::quiz::answer::{self, AnswerLetter};
use crate::quiz::score::{self, SessionScore};
use crate::quiz::store;
use crate::state::AppState;

/// GET /api/professions
pub async fn handle_list_professions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Profession>>, AppError> {
    let professions = store::list_professions(&state.db).await?;
    Ok(Json(professions))
}

/// GET /api/quiz/:profession_id
///
/// Quiz entry point: verifies the profession exists and lazily
/// initializes the session counters so `/api/score` reports zeros
/// before the first submission.
pub async fn handle_quiz(
    State(state): State<AppState>,
    Path(profession_id): Path<i64>,
    session: Session,
) -> Result<Json<Profession>, AppError> {
    let profession = store::find_profession(&state.db, profession_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profession {profession_id} not found")))?;

    score::init(&session).await?;

    Ok(Json(profession))
}

/// GET /api/question/:profession_id
///
/// Picks one question uniformly at random from the profession's pool.
/// The response carries the text and options only.
pub async fn handle_get_question(
    State(state): State<AppState>,
    Path(profession_id): Path<i64>,
) -> Result<Json<QuestionPrompt>, AppError> {
    let questions = store::questions_for_profession(&state.db, profession_id).await?;
    let question = store::pick_random(&questions)
        .ok_or(AppError::NoQuestions(profession_id))?
        .clone();

    Ok(Json(QuestionPrompt::from(question)))
}

#[derive(Debug, Deserialize)]
pub struct CheckAnswerRequest {
    pub question_id: i64,
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct CheckAnswerResponse {
    pub correct: bool,
    pub correct_answer: String,
    pub explanation: Option<String>,
    pub score: u32,
    pub total: u32,
}

/// POST /api/check-answer
pub async fn handle_check_answer(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<CheckAnswerRequest>,
) -> Result<Json<CheckAnswerResponse>, AppError> {
    let submitted: AnswerLetter = req.answer.parse().map_err(|_| {
        AppError::Validation(format!("'{}' is not an answer letter (A-D)", req.answer))
    })?;

    let question = store::find_question(&state.db, req.question_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Question {} not found", req.question_id)))?;

    // Seeding guarantees the stored letter is in A-D; a row that violates
    // that is a data bug, not a client error.
    let correct_answer: AnswerLetter = question.correct_answer.parse().map_err(|_| {
        anyhow::anyhow!(
            "question {} has invalid correct_answer '{}'",
            question.id,
            question.correct_answer
        )
    })?;

    let correct = answer::is_correct(submitted, correct_answer);

    let mut tally: SessionScore = score::load(&session).await?;
    tally.record(correct);
    score::save(&session, tally).await?;

    Ok(Json(CheckAnswerResponse {
        correct,
        correct_answer: correct_answer.as_str().to_string(),
        explanation: question.explanation,
        score: tally.score,
        total: tally.total,
    }))
}

/// GET /api/score
pub async fn handle_get_score(session: Session) -> Result<Json<SessionScore>, AppError> {
    let tally = score::load(&session).await?;
    Ok(Json(tally))
}
