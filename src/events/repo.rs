use async_trait::async_trait;

use super::repo_types::{Event, EventFields};
use crate::{db::PgStore, error::Result};

#[async_trait]
pub trait EventRepo: Send + Sync {
    async fn list(&self) -> Result<Vec<Event>>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Event>>;
    async fn insert(&self, owner_id: i64, fields: &EventFields) -> Result<Event>;
    /// Writes only if `owner_id` still owns the row; `None` otherwise.
    async fn update_owned(&self, id: i64, owner_id: i64, fields: &EventFields)
        -> Result<Option<Event>>;
    /// `false` when no row owned by `owner_id` was removed.
    async fn delete_owned(&self, id: i64, owner_id: i64) -> Result<bool>;
}

#[async_trait]
impl EventRepo for PgStore {
    async fn list(&self) -> Result<Vec<Event>> {
        let rows = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, name, description, location, date_time, user_id
            FROM events
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Event>> {
        let row = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, name, description, location, date_time, user_id
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert(&self, owner_id: i64, fields: &EventFields) -> Result<Event> {
        let row = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (name, description, location, date_time, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, location, date_time, user_id
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(&fields.location)
        .bind(fields.date_time)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_owned(
        &self,
        id: i64,
        owner_id: i64,
        fields: &EventFields,
    ) -> Result<Option<Event>> {
        let row = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
               SET name = $3, description = $4, location = $5, date_time = $6
             WHERE id = $1 AND user_id = $2
            RETURNING id, name, description, location, date_time, user_id
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(&fields.location)
        .bind(fields.date_time)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_owned(&self, id: i64, owner_id: i64) -> Result<bool> {
        let done = sqlx::query("DELETE FROM events WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;
        Ok(done.rows_affected() > 0)
    }
}
