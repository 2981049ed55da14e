use color_eyre::Result;
use ulid::Ulid;

use super::Db;
use super::models::AuthUser;

impl Db {
    pub async fn create_user(&self, email: &str, display_name: &str) -> Result<i64> {
        let user_id: i64 =
            sqlx::query_scalar("INSERT INTO users (email, display_name) VALUES ($1, $2) RETURNING id")
                .bind(email)
                .bind(display_name)
                .fetch_one(&self.pool)
                .await?;

        tracing::info!("new user created: id={user_id}, email={email}");
        Ok(user_id)
    }

    pub async fn create_user_session(&self, user_id: i64) -> Result<String> {
        let session = Ulid::new().to_string();

        sqlx::query("INSERT INTO user_sessions (id, user_id) VALUES ($1, $2)")
            .bind(&session)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(session)
    }

    pub async fn get_user_by_session(&self, session_id: &str) -> Result<Option<AuthUser>> {
        let user = sqlx::query_as::<_, AuthUser>(
            r#"
            SELECT users.id, users.email, users.display_name
            FROM user_sessions
            JOIN users ON users.id = user_sessions.user_id
            WHERE user_sessions.id = $1
            "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
