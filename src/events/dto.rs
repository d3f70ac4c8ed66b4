use serde::Deserialize;
use time::OffsetDateTime;

use super::repo_types::EventFields;
use crate::error::{AppError, Result};

/// Body of `POST /events` and `PUT /events/:id`. An incoming `userId` is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    pub name: String,
    pub description: String,
    pub location: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date_time: OffsetDateTime,
}

impl EventRequest {
    pub fn into_fields(self) -> Result<EventFields> {
        for (field, value) in [
            ("name", &self.name),
            ("description", &self.description),
            ("location", &self.location),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} is required")));
            }
        }
        Ok(EventFields {
            name: self.name,
            description: self.description,
            location: self.location,
            date_time: self.date_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_camel_case_and_ignores_owner() {
        let req: EventRequest = serde_json::from_value(json!({
            "name": "RustConf",
            "description": "talks",
            "location": "Montreal",
            "dateTime": "2026-09-10T09:00:00Z",
            "userId": 999
        }))
        .unwrap();
        let fields = req.into_fields().unwrap();
        assert_eq!(fields.name, "RustConf");
        assert_eq!(fields.date_time.year(), 2026);
    }

    #[test]
    fn blank_fields_are_rejected() {
        let req: EventRequest = serde_json::from_value(json!({
            "name": "  ",
            "description": "talks",
            "location": "Montreal",
            "dateTime": "2026-09-10T09:00:00Z"
        }))
        .unwrap();
        match req.into_fields() {
            Err(AppError::Validation(msg)) => assert!(msg.contains("name")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn missing_date_fails_to_parse() {
        let parsed = serde_json::from_value::<EventRequest>(json!({
            "name": "RustConf",
            "description": "talks",
            "location": "Montreal"
        }));
        assert!(parsed.is_err());
    }
}
