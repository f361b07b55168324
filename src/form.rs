//! Chore Draft Validation
//!
//! Turns raw form input into a creation payload.

use chrono::{Local, TimeZone};
use thiserror::Error;

use crate::models::NewChore;
use crate::time::{normalize_due_date_in, parse_calendar_date};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Name is required")]
    MissingName,
    #[error("Frequency must be a whole number of days, at least 1")]
    InvalidFrequency,
    #[error("Due date is required")]
    MissingDueDate,
    #[error("Due date is not a valid date")]
    InvalidDueDate,
}

/// Raw values of the creation form inputs
#[derive(Debug, Clone, PartialEq)]
pub struct ChoreDraft {
    pub name: String,
    pub description: String,
    pub frequency: String,
    /// `YYYY-MM-DD` from a date input
    pub due_date: String,
}

impl Default for ChoreDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            frequency: "1".to_string(),
            due_date: String::new(),
        }
    }
}

impl ChoreDraft {
    /// Validate against the viewer's local timezone
    pub fn to_new_chore(&self) -> Result<NewChore, FormError> {
        self.to_new_chore_in(&Local)
    }

    pub fn to_new_chore_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<NewChore, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }

        let frequency = match self.frequency.trim().parse::<u32>() {
            Ok(days) if days >= 1 => days,
            _ => return Err(FormError::InvalidFrequency),
        };

        if self.due_date.trim().is_empty() {
            return Err(FormError::MissingDueDate);
        }
        let date = parse_calendar_date(&self.due_date).ok_or(FormError::InvalidDueDate)?;
        let due_date = normalize_due_date_in(date, tz).ok_or(FormError::InvalidDueDate)?;

        let description = if self.description.is_empty() {
            None
        } else {
            Some(self.description.clone())
        };

        Ok(NewChore {
            name: self.name.clone(),
            description,
            frequency,
            due_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn draft(name: &str, frequency: &str, due_date: &str) -> ChoreDraft {
        ChoreDraft {
            name: name.to_string(),
            description: String::new(),
            frequency: frequency.to_string(),
            due_date: due_date.to_string(),
        }
    }

    #[test]
    fn test_default_frequency_is_one_day() {
        let d = ChoreDraft::default();
        assert_eq!(d.frequency, "1");
        assert!(d.due_date.is_empty());
    }

    #[test]
    fn test_valid_draft() {
        let payload = draft("Dishes", "2", "2024-06-01").to_new_chore_in(&Utc).unwrap();
        assert_eq!(
            payload,
            NewChore {
                name: "Dishes".to_string(),
                description: None,
                frequency: 2,
                due_date: "2024-06-01T23:59:59.999Z".to_string(),
            }
        );
    }

    #[test]
    fn test_due_date_uses_given_timezone() {
        let jst = FixedOffset::east_opt(9 * 3600).unwrap();
        let payload = draft("Dishes", "2", "2024-06-01").to_new_chore_in(&jst).unwrap();
        assert_eq!(payload.due_date, "2024-06-01T14:59:59.999Z");
    }

    #[test]
    fn test_description_kept_when_present() {
        let mut d = draft("Vacuum", "7", "2024-06-01");
        d.description = "Living room too".to_string();
        let payload = d.to_new_chore_in(&Utc).unwrap();
        assert_eq!(payload.description.as_deref(), Some("Living room too"));
    }

    #[test]
    fn test_name_required() {
        assert_eq!(
            draft("", "1", "2024-06-01").to_new_chore_in(&Utc),
            Err(FormError::MissingName)
        );
        assert_eq!(
            draft("   ", "1", "2024-06-01").to_new_chore_in(&Utc),
            Err(FormError::MissingName)
        );
    }

    #[test]
    fn test_frequency_must_be_positive_integer() {
        for bad in ["0", "-3", "1.5", "", "weekly"] {
            assert_eq!(
                draft("Dishes", bad, "2024-06-01").to_new_chore_in(&Utc),
                Err(FormError::InvalidFrequency),
                "frequency {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_due_date_required_and_valid() {
        assert_eq!(
            draft("Dishes", "1", "").to_new_chore_in(&Utc),
            Err(FormError::MissingDueDate)
        );
        assert_eq!(
            draft("Dishes", "1", "2024-13-01").to_new_chore_in(&Utc),
            Err(FormError::InvalidDueDate)
        );
    }
}
