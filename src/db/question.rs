use color_eyre::Result;

use super::Db;
use super::models::QuestionRow;

impl Db {
    pub async fn get_question(&self, public_id: &str) -> Result<Option<QuestionRow>> {
        let question = sqlx::query_as::<_, QuestionRow>(
            "SELECT id, public_id, game_id, question, answer, question_type, options FROM questions WHERE public_id = $1",
        )
        .bind(public_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    /// Questions for one game, in insertion order.
    pub async fn get_game_questions(&self, game_id: i64) -> Result<Vec<QuestionRow>> {
        let questions = sqlx::query_as::<_, QuestionRow>(
            "SELECT id, public_id, game_id, question, answer, question_type, options FROM questions WHERE game_id = $1 ORDER BY id",
        )
        .bind(game_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn questions_count(&self, game_id: i64) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions WHERE game_id = $1")
            .bind(game_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
