//! Frontend Models
//!
//! Data structures matching the chore API's JSON bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::time::parse_instant;

/// Chore data structure (matches backend)
///
/// Timestamps are kept exactly as the server sent them so that a touch
/// overlay never re-serializes fields the client did not change.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chore {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Recurrence interval in days
    pub frequency: u32,
    pub due_date: String,
    pub created_date: String,
    pub updated_date: String,
}

impl Chore {
    /// Due date as an absolute instant, `None` when the server value is unreadable
    pub fn due_instant(&self) -> Option<DateTime<Utc>> {
        parse_instant(&self.due_date)
    }

    /// Apply a touch response: only the due and updated dates change
    pub fn apply_touch(&mut self, touched: TouchedChore) {
        self.due_date = touched.due_date;
        self.updated_date = touched.updated_date;
    }
}

/// Creation payload sent with `PUT /items`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChore {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub frequency: u32,
    pub due_date: String,
}

/// Body returned by `PUT /items`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedChore {
    pub id: String,
}

/// Body returned by `PATCH /items/{id}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouchedChore {
    pub due_date: String,
    pub updated_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chore_from_camel_case_json() {
        let json = r#"{
            "id": "abc",
            "name": "Dishes",
            "frequency": 2,
            "dueDate": "2024-06-01T23:59:59.999Z",
            "createdDate": "2024-05-01T10:00:00.000Z",
            "updatedDate": "2024-05-01T10:00:00.000Z"
        }"#;

        let chore: Chore = serde_json::from_str(json).unwrap();
        assert_eq!(chore.id, "abc");
        assert_eq!(chore.description, None);
        assert_eq!(chore.frequency, 2);
        assert_eq!(
            chore.due_instant().unwrap().to_rfc3339(),
            "2024-06-01T23:59:59.999+00:00"
        );
    }

    #[test]
    fn test_due_instant_rejects_garbage() {
        let chore = Chore {
            id: "1".to_string(),
            name: "Trash".to_string(),
            description: None,
            frequency: 1,
            due_date: "not a date".to_string(),
            created_date: String::new(),
            updated_date: String::new(),
        };
        assert!(chore.due_instant().is_none());
    }

    #[test]
    fn test_due_instant_accepts_local_iso_without_offset() {
        let chore = Chore {
            id: "1".to_string(),
            name: "Trash".to_string(),
            description: None,
            frequency: 1,
            due_date: "2024-06-01T23:59:59.999".to_string(),
            created_date: String::new(),
            updated_date: String::new(),
        };
        let due = chore.due_instant().unwrap();
        assert_eq!(
            due.with_timezone(&chrono::Local).naive_local().to_string(),
            "2024-06-01 23:59:59.999"
        );
    }

    #[test]
    fn test_new_chore_omits_missing_description() {
        let payload = NewChore {
            name: "Dishes".to_string(),
            description: None,
            frequency: 2,
            due_date: "2024-06-01T23:59:59.999Z".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Dishes",
                "frequency": 2,
                "dueDate": "2024-06-01T23:59:59.999Z"
            })
        );
    }
}
