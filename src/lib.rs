pub mod db;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod names;
pub mod play;
pub mod provider;
pub mod rejections;
pub mod utils;

use axum::Router;

#[derive(Clone)]
pub struct AppState {
    pub db: db::Db,
    pub provider: provider::QuestionProvider,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::game::routes())
        .merge(handlers::answer::routes())
        .with_state(state)
}
