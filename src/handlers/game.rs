use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
};
use garde::Validate;

use crate::{
    AppState,
    extractors::AuthGuard,
    models::{CreateGameBody, CreatedGame, GameSummary, GameType, GameView, PlayQuestionView},
    names,
    rejections::{AppError, ResultExt},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::CREATE_GAME_URL, post(create_game))
        .route("/api/game/{game_id}", get(get_game))
        .route(names::HISTORY_URL, get(history))
}

async fn create_game(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<impl IntoResponse, AppError> {
    // Decode by hand so a malformed payload (e.g. an unknown quiz type)
    // comes back as a 400, not axum's 422.
    let body: CreateGameBody =
        serde_json::from_value(body).reject_input("invalid game creation payload")?;
    body.validate()?;

    let questions = state
        .provider
        .fetch(&body.topic, body.game_type, body.amount)
        .await
        .reject_upstream("could not fetch questions")?;

    let game_id = state
        .db
        .create_game_with_questions(user.id, &body.topic, &questions)
        .await
        .reject("could not create game")?;

    Ok(Json(CreatedGame { game_id }))
}

async fn get_game(
    AuthGuard(_user): AuthGuard,
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<GameView>, AppError> {
    let game = state
        .db
        .get_game(&game_id)
        .await
        .reject("could not get game")?
        .ok_or(AppError::NotFound("game not found"))?;

    let game_type =
        GameType::parse(&game.game_type).ok_or(AppError::Storage("unknown game type"))?;

    let questions = state
        .db
        .get_game_questions(game.id)
        .await
        .reject("could not get questions")?;

    let questions = questions
        .into_iter()
        .map(|q| {
            let options = match q.options {
                Some(text) => {
                    let decoded = serde_json::from_str::<Vec<String>>(&text).map_err(|e| {
                        tracing::error!("could not decode options for question {}: {e}", q.public_id);
                        AppError::Storage("could not decode question options")
                    })?;
                    Some(decoded)
                }
                None => None,
            };
            Ok(PlayQuestionView {
                question_id: q.public_id,
                question: q.question,
                options,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    Ok(Json(GameView {
        game_id: game.public_id,
        topic: game.topic,
        game_type,
        time_started: game.time_started,
        questions,
    }))
}

async fn history(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
) -> Result<Json<Vec<GameSummary>>, AppError> {
    let games = state
        .db
        .recent_games(user.id, names::HISTORY_LIMIT)
        .await
        .reject("could not get recent games")?;

    let games = games
        .into_iter()
        .map(|g| {
            let game_type =
                GameType::parse(&g.game_type).ok_or(AppError::Storage("unknown game type"))?;
            Ok(GameSummary {
                game_id: g.public_id,
                topic: g.topic,
                game_type,
                time_started: g.time_started,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    Ok(Json(games))
}
