use axum::{Json, Router, extract::State, routing::post};

use crate::{
    AppState,
    extractors::AuthGuard,
    models::{AnswerCheck, CheckAnswerBody},
    names,
    rejections::{AppError, ResultExt},
    utils,
};

pub fn routes() -> Router<AppState> {
    Router::new().route(names::CHECK_ANSWER_URL, post(check_answer))
}

async fn check_answer(
    AuthGuard(_user): AuthGuard,
    State(state): State<AppState>,
    Json(body): Json<CheckAnswerBody>,
) -> Result<Json<AnswerCheck>, AppError> {
    let question = state
        .db
        .get_question(&body.question_id)
        .await
        .reject("could not get question")?
        .ok_or(AppError::NotFound("question not found"))?;

    let percentage_similar = utils::similarity_percent(&body.user_input, &question.answer);

    Ok(Json(AnswerCheck { percentage_similar }))
}
