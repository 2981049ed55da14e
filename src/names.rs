pub const CREATE_GAME_URL: &str = "/api/game";
pub const HISTORY_URL: &str = "/api/history";
pub const CHECK_ANSWER_URL: &str = "/api/checkAnswer";

/// Path on the question provider service, relative to its base URL.
pub const PROVIDER_QUESTIONS_PATH: &str = "/api/questions";

pub const USER_SESSION_COOKIE_NAME: &str = "user_session";

pub fn game_url(game_id: &str) -> String {
    format!("/api/game/{game_id}")
}

// Creation payload bounds
pub const MIN_TOPIC_LENGTH: usize = 4;
pub const MAX_TOPIC_LENGTH: usize = 50;
pub const MIN_AMOUNT: i64 = 1;
pub const MAX_AMOUNT: i64 = 10;

pub const HISTORY_LIMIT: i64 = 10;
