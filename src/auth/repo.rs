use async_trait::async_trait;

use super::repo_types::User;
use crate::{
    db::PgStore,
    error::{is_unique_violation, AppError, Result},
};

#[async_trait]
pub trait UserRepo: Send + Sync {
    /// Inserts a user; a taken email is a `Conflict`.
    async fn create(&self, email: &str, password_hash: &str) -> Result<User>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
}

#[async_trait]
impl UserRepo for PgStore {
    async fn create(&self, email: &str, password_hash: &str) -> Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash, created_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::conflict("Email already registered", Some(e.to_string()))
            } else {
                AppError::Database(e)
            }
        })
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}
