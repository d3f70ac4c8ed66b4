use tracing::{info, warn};

use super::{
    repo::EventRepo,
    repo_types::{Event, EventFields},
};
use crate::error::{AppError, Result};

fn not_found() -> AppError {
    AppError::NotFound("Event not found".into())
}

pub async fn list_events(events: &dyn EventRepo) -> Result<Vec<Event>> {
    events.list().await
}

pub async fn get_event(events: &dyn EventRepo, id: i64) -> Result<Event> {
    events.find_by_id(id).await?.ok_or_else(not_found)
}

/// The owner is always the caller.
pub async fn create_event(
    events: &dyn EventRepo,
    fields: EventFields,
    owner_id: i64,
) -> Result<Event> {
    let event = events.insert(owner_id, &fields).await?;
    info!(event_id = event.id, user_id = owner_id, "event created");
    Ok(event)
}

async fn ensure_owner(
    events: &dyn EventRepo,
    id: i64,
    caller_id: i64,
    action: &str,
) -> Result<()> {
    let existing = get_event(events, id).await?;
    if existing.user_id != caller_id {
        warn!(event_id = id, owner_id = existing.user_id, caller_id, "not the event owner");
        return Err(AppError::Forbidden(format!(
            "You are not authorized to {action} this event"
        )));
    }
    Ok(())
}

pub async fn update_event(
    events: &dyn EventRepo,
    id: i64,
    fields: EventFields,
    caller_id: i64,
) -> Result<Event> {
    ensure_owner(events, id, caller_id, "update").await?;
    let event = events
        .update_owned(id, caller_id, &fields)
        .await?
        .ok_or_else(not_found)?;
    info!(event_id = id, user_id = caller_id, "event updated");
    Ok(event)
}

pub async fn delete_event(events: &dyn EventRepo, id: i64, caller_id: i64) -> Result<()> {
    ensure_owner(events, id, caller_id, "delete").await?;
    if !events.delete_owned(id, caller_id).await? {
        return Err(not_found());
    }
    info!(event_id = id, user_id = caller_id, "event deleted");
    Ok(())
}
