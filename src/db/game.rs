use chrono::Utc;
use color_eyre::Result;
use rand::Rng;
use rand::seq::SliceRandom;
use ulid::Ulid;

use super::Db;
use super::models::{GameRow, GameSummaryRow};
use crate::models::{RawMcqQuestion, RawQuestions};

struct NewQuestion {
    public_id: String,
    question: String,
    answer: String,
    options: Option<String>,
}

impl Db {
    /// Insert a game with all its questions atomically in a transaction.
    /// Either both mutations land or neither does, so a game can never be
    /// left behind without questions.
    /// Returns the public_id (ULID) of the newly created game.
    pub async fn create_game_with_questions(
        &self,
        user_id: i64,
        topic: &str,
        questions: &RawQuestions,
    ) -> Result<String> {
        let public_id = Ulid::new().to_string();
        let game_type = questions.game_type();
        let rows = build_questions(questions, &mut rand::thread_rng())?;

        let mut tx = self.pool.begin().await?;

        let game_id: i64 = sqlx::query_scalar(
            "INSERT INTO games (public_id, user_id, topic, game_type, time_started) VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(&public_id)
        .bind(user_id)
        .bind(topic)
        .bind(game_type.as_str())
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        if rows.is_empty() {
            tx.commit().await?;
            tracing::info!("new game created with id: {game_id} for user_id: {user_id}");
            return Ok(public_id);
        }

        let mut builder = sqlx::QueryBuilder::<sqlx::Sqlite>::new(
            "INSERT INTO questions (public_id, game_id, question, answer, question_type, options) ",
        );
        builder.push_values(rows, |mut b, row| {
            b.push_bind(row.public_id)
                .push_bind(game_id)
                .push_bind(row.question)
                .push_bind(row.answer)
                .push_bind(game_type.as_str())
                .push_bind(row.options);
        });
        builder.build().execute(&mut *tx).await?;

        tx.commit().await?;

        tracing::info!("new game created with id: {game_id} for user_id: {user_id}");
        Ok(public_id)
    }

    pub async fn get_game(&self, public_id: &str) -> Result<Option<GameRow>> {
        let game = sqlx::query_as::<_, GameRow>(
            "SELECT id, public_id, user_id, topic, game_type, time_started FROM games WHERE public_id = $1",
        )
        .bind(public_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(game)
    }

    pub async fn recent_games(&self, user_id: i64, limit: i64) -> Result<Vec<GameSummaryRow>> {
        let games = sqlx::query_as::<_, GameSummaryRow>(
            r#"
            SELECT public_id, topic, game_type, time_started
            FROM games
            WHERE user_id = $1
            ORDER BY id DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(games)
    }

    pub async fn games_count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM games")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

fn build_questions<R: Rng>(questions: &RawQuestions, rng: &mut R) -> Result<Vec<NewQuestion>> {
    let rows = match questions {
        RawQuestions::Mcq(items) => items
            .iter()
            .map(|q| {
                let options = serde_json::to_string(&shuffled_options(q, rng))?;
                Ok(NewQuestion {
                    public_id: Ulid::new().to_string(),
                    question: q.question.clone(),
                    answer: q.answer.clone(),
                    options: Some(options),
                })
            })
            .collect::<Result<Vec<_>>>()?,
        RawQuestions::OpenEnded(items) => items
            .iter()
            .map(|q| NewQuestion {
                public_id: Ulid::new().to_string(),
                question: q.question.clone(),
                answer: q.answer.clone(),
                options: None,
            })
            .collect(),
    };

    Ok(rows)
}

/// The persisted option order: the three distractors plus the correct
/// answer, shuffled so every permutation of the four slots is equally
/// likely.
fn shuffled_options<R: Rng>(question: &RawMcqQuestion, rng: &mut R) -> Vec<String> {
    let mut options = vec![
        question.option1.clone(),
        question.option2.clone(),
        question.option3.clone(),
        question.answer.clone(),
    ];
    options.shuffle(rng);
    options
}
