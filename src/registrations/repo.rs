use async_trait::async_trait;

use crate::{
    db::PgStore,
    error::{is_foreign_key_violation, violated_constraint, AppError, Result},
};

const EVENT_FK: &str = "registrations_event_id_fkey";
const USER_FK: &str = "registrations_user_id_fkey";

/// Which side of a registration a foreign-key failure points at.
fn missing_reference(constraint: Option<&str>) -> Option<AppError> {
    match constraint {
        // event deleted between lookup and insert
        Some(EVENT_FK) => Some(AppError::NotFound("Event not found".into())),
        // token outlived its account
        Some(USER_FK) => Some(AppError::NotFound("User not found".into())),
        _ => None,
    }
}

#[async_trait]
pub trait RegistrationRepo: Send + Sync {
    /// `false` when the pair was already registered.
    async fn insert(&self, event_id: i64, user_id: i64) -> Result<bool>;
    /// `false` when there was nothing to remove.
    async fn delete(&self, event_id: i64, user_id: i64) -> Result<bool>;
}

#[async_trait]
impl RegistrationRepo for PgStore {
    async fn insert(&self, event_id: i64, user_id: i64) -> Result<bool> {
        let done = sqlx::query(
            r#"
            INSERT INTO registrations (event_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (event_id, user_id) DO NOTHING
            "#,
        )
        .bind(event_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let missing = is_foreign_key_violation(&e)
                .then(|| missing_reference(violated_constraint(&e)))
                .flatten();
            missing.unwrap_or(AppError::Database(e))
        })?;
        Ok(done.rows_affected() > 0)
    }

    async fn delete(&self, event_id: i64, user_id: i64) -> Result<bool> {
        let done = sqlx::query("DELETE FROM registrations WHERE event_id = $1 AND user_id = $2")
            .bind(event_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(done.rows_affected() > 0)
    }
}
