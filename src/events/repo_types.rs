use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Event record in the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub location: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date_time: OffsetDateTime,
    pub user_id: i64, // owner
}

/// The fields an owner may set; the owner itself is never among them.
#[derive(Debug, Clone, PartialEq)]
pub struct EventFields {
    pub name: String,
    pub description: String,
    pub location: String,
    pub date_time: OffsetDateTime,
}
