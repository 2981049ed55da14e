// Database model structs

use chrono::{DateTime, Utc};

#[derive(Clone, sqlx::FromRow)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub display_name: String,
}

#[derive(sqlx::FromRow)]
pub struct GameRow {
    pub id: i64,
    pub public_id: String,
    pub user_id: i64,
    pub topic: String,
    pub game_type: String,
    pub time_started: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
pub struct GameSummaryRow {
    pub public_id: String,
    pub topic: String,
    pub game_type: String,
    pub time_started: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
pub struct QuestionRow {
    pub id: i64,
    pub public_id: String,
    pub game_id: i64,
    pub question: String,
    pub answer: String,
    pub question_type: String,
    pub options: Option<String>,
}
