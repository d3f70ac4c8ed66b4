use tracing::{info, warn};

use super::repo::RegistrationRepo;
use crate::{
    error::{AppError, Result},
    events::{repo::EventRepo, services::get_event},
};

/// Registering the same user twice for one event is a `Conflict`.
pub async fn register(
    events: &dyn EventRepo,
    registrations: &dyn RegistrationRepo,
    event_id: i64,
    user_id: i64,
) -> Result<()> {
    get_event(events, event_id).await?;
    if !registrations.insert(event_id, user_id).await? {
        warn!(event_id, user_id, "already registered");
        return Err(AppError::conflict(
            "Already registered for this event",
            Some(format!("registration ({event_id}, {user_id}) already exists")),
        ));
    }
    info!(event_id, user_id, "registered for event");
    Ok(())
}

/// Cancelling a registration that does not exist is `NotFound`.
pub async fn cancel_registration(
    registrations: &dyn RegistrationRepo,
    event_id: i64,
    user_id: i64,
) -> Result<()> {
    if !registrations.delete(event_id, user_id).await? {
        return Err(AppError::NotFound("Registration not found".into()));
    }
    info!(event_id, user_id, "registration cancelled");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        events::{repo_types::EventFields, services::{create_event, delete_event}},
        memory::MemoryStore,
    };
    use time::macros::datetime;

    async fn seed_event(store: &MemoryStore, owner: i64) -> i64 {
        let fields = EventFields {
            name: "Rust meetup".into(),
            description: "lightning talks".into(),
            location: "Lisbon".into(),
            date_time: datetime!(2026-12-03 19:00 UTC),
        };
        create_event(store, fields, owner).await.unwrap().id
    }

    #[tokio::test]
    async fn register_then_cancel_leaves_nothing() {
        let store = MemoryStore::default();
        let event_id = seed_event(&store, 1).await;

        register(&store, &store, event_id, 2).await.unwrap();
        assert!(store.is_registered(event_id, 2));

        cancel_registration(&store, event_id, 2).await.unwrap();
        assert!(!store.is_registered(event_id, 2));
    }

    #[tokio::test]
    async fn double_registration_conflicts_and_keeps_one_row() {
        let store = MemoryStore::default();
        let event_id = seed_event(&store, 1).await;

        register(&store, &store, event_id, 2).await.unwrap();
        let err = register(&store, &store, event_id, 2).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict { .. }));

        cancel_registration(&store, event_id, 2).await.unwrap();
        assert!(!store.is_registered(event_id, 2));
    }

    #[tokio::test]
    async fn register_for_missing_event_is_not_found() {
        let store = MemoryStore::default();
        let err = register(&store, &store, 77, 2).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(!store.is_registered(77, 2));
    }

    #[tokio::test]
    async fn cancel_without_registration_is_not_found() {
        let store = MemoryStore::default();
        let event_id = seed_event(&store, 1).await;
        let err = cancel_registration(&store, event_id, 2).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn deleting_event_drops_its_registrations() {
        let store = MemoryStore::default();
        let event_id = seed_event(&store, 1).await;
        register(&store, &store, event_id, 2).await.unwrap();

        delete_event(&store, event_id, 1).await.unwrap();
        assert!(!store.is_registered(event_id, 2));
    }
}
