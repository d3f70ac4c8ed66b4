//! In-process store used by tests in place of Postgres.

use std::{
    collections::{BTreeMap, BTreeSet},
    sync::Mutex,
};

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::{
    auth::{repo::UserRepo, repo_types::User},
    error::{AppError, Result},
    events::{
        repo::EventRepo,
        repo_types::{Event, EventFields},
    },
    registrations::repo::RegistrationRepo,
};

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Tables>,
}

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    events: BTreeMap<i64, Event>,
    registrations: BTreeSet<(i64, i64)>,
    next_user_id: i64,
    next_event_id: i64,
}

impl MemoryStore {
    fn tables(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.inner.lock().expect("memory store poisoned")
    }

    pub fn is_registered(&self, event_id: i64, user_id: i64) -> bool {
        self.tables().registrations.contains(&(event_id, user_id))
    }
}

#[async_trait]
impl UserRepo for MemoryStore {
    async fn create(&self, email: &str, password_hash: &str) -> Result<User> {
        let mut t = self.tables();
        if t.users.iter().any(|u| u.email == email) {
            return Err(AppError::conflict(
                "Email already registered",
                Some(format!("duplicate email {email}")),
            ));
        }
        t.next_user_id += 1;
        let user = User {
            id: t.next_user_id,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: OffsetDateTime::now_utc(),
        };
        t.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.tables().users.iter().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl EventRepo for MemoryStore {
    async fn list(&self) -> Result<Vec<Event>> {
        Ok(self.tables().events.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Event>> {
        Ok(self.tables().events.get(&id).cloned())
    }

    async fn insert(&self, owner_id: i64, fields: &EventFields) -> Result<Event> {
        let mut t = self.tables();
        t.next_event_id += 1;
        let event = Event {
            id: t.next_event_id,
            name: fields.name.clone(),
            description: fields.description.clone(),
            location: fields.location.clone(),
            date_time: fields.date_time,
            user_id: owner_id,
        };
        t.events.insert(event.id, event.clone());
        Ok(event)
    }

    async fn update_owned(
        &self,
        id: i64,
        owner_id: i64,
        fields: &EventFields,
    ) -> Result<Option<Event>> {
        let mut t = self.tables();
        let Some(event) = t.events.get_mut(&id).filter(|e| e.user_id == owner_id) else {
            return Ok(None);
        };
        event.name = fields.name.clone();
        event.description = fields.description.clone();
        event.location = fields.location.clone();
        event.date_time = fields.date_time;
        Ok(Some(event.clone()))
    }

    async fn delete_owned(&self, id: i64, owner_id: i64) -> Result<bool> {
        let mut t = self.tables();
        if !t.events.get(&id).is_some_and(|e| e.user_id == owner_id) {
            return Ok(false);
        }
        t.events.remove(&id);
        t.registrations.retain(|(event_id, _)| *event_id != id);
        Ok(true)
    }
}

#[async_trait]
impl RegistrationRepo for MemoryStore {
    async fn insert(&self, event_id: i64, user_id: i64) -> Result<bool> {
        let mut t = self.tables();
        if !t.events.contains_key(&event_id) {
            return Err(AppError::NotFound("Event not found".into()));
        }
        Ok(t.registrations.insert((event_id, user_id)))
    }

    async fn delete(&self, event_id: i64, user_id: i64) -> Result<bool> {
        Ok(self.tables().registrations.remove(&(event_id, user_id)))
    }
}
