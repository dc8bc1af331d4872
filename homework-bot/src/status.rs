//! Homework review statuses and the message sent for each.

use serde_json::Value;

use crate::error::PollError;

/// Review status of a submission. Closed set; anything else is [`PollError::UnknownStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub const ALL: [HomeworkStatus; 3] = [
        HomeworkStatus::Approved,
        HomeworkStatus::Reviewing,
        HomeworkStatus::Rejected,
    ];

    /// Resolves a wire status key. Total: every input maps to a status or an error.
    pub fn parse(key: &str) -> Result<Self, PollError> {
        match key {
            "" => Err(PollError::NotStatus),
            "approved" => Ok(HomeworkStatus::Approved),
            "reviewing" => Ok(HomeworkStatus::Reviewing),
            "rejected" => Ok(HomeworkStatus::Rejected),
            other => Err(PollError::UnknownStatus(other.to_string())),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "The work has been reviewed: the reviewer liked everything. Hooray!",
            HomeworkStatus::Reviewing => "The work has been taken for review.",
            HomeworkStatus::Rejected => "The work has been reviewed: the reviewer has comments.",
        }
    }
}

/// One element of the API's `homeworks` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkRecord {
    pub name: String,
    pub status: HomeworkStatus,
}

fn required<'a>(homework: &'a Value, key: &str) -> Result<&'a Value, PollError> {
    homework
        .get(key)
        .ok_or_else(|| PollError::MissingKey(key.to_string()))
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl HomeworkRecord {
    /// Reads `status` then `homework_name`; the first missing key is reported.
    pub fn from_value(homework: &Value) -> Result<Self, PollError> {
        let status = required(homework, "status")?;
        let name = required(homework, "homework_name")?;
        let status = match status {
            Value::String(key) => HomeworkStatus::parse(key)?,
            other => return Err(PollError::UnknownStatus(other.to_string())),
        };
        Ok(Self {
            name: text(name),
            status,
        })
    }

    pub fn message(&self) -> String {
        format!(
            "Changed review status for \"{}\". {}",
            self.name,
            self.status.verdict()
        )
    }
}

/// Renders the status message for one homework element.
pub fn format_status(homework: &Value) -> Result<String, PollError> {
    HomeworkRecord::from_value(homework).map(|record| record.message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_each_known_status() {
        for status in HomeworkStatus::ALL {
            let homework = json!({"status": status.key(), "homework_name": "X"});
            let message = format_status(&homework).unwrap();
            assert!(message.contains("\"X\""));
            assert!(message.ends_with(status.verdict()));
        }
    }

    #[test]
    fn test_format_approved_exact_text() {
        let homework = json!({"status": "approved", "homework_name": "proj1"});
        assert_eq!(
            format_status(&homework).unwrap(),
            "Changed review status for \"proj1\". The work has been reviewed: the reviewer liked everything. Hooray!"
        );
    }

    #[test]
    fn test_verdicts_are_distinct() {
        let verdicts: std::collections::HashSet<_> =
            HomeworkStatus::ALL.iter().map(|s| s.verdict()).collect();
        assert_eq!(verdicts.len(), 3);
    }

    #[test]
    fn test_format_empty_status() {
        let homework = json!({"status": "", "homework_name": "X"});
        assert!(matches!(format_status(&homework), Err(PollError::NotStatus)));
    }

    #[test]
    fn test_format_unknown_status() {
        let homework = json!({"status": "graded", "homework_name": "X"});
        match format_status(&homework) {
            Err(PollError::UnknownStatus(key)) => assert_eq!(key, "graded"),
            other => panic!("expected UnknownStatus, got {:?}", other),
        }

        let homework = json!({"status": null, "homework_name": "X"});
        assert!(matches!(
            format_status(&homework),
            Err(PollError::UnknownStatus(_))
        ));
    }

    #[test]
    fn test_format_missing_keys() {
        let err = format_status(&json!({"status": "approved"})).unwrap_err();
        assert!(matches!(err, PollError::MissingKey(ref key) if key == "homework_name"));

        let err = format_status(&json!({"homework_name": "X"})).unwrap_err();
        assert!(matches!(err, PollError::MissingKey(ref key) if key == "status"));
        assert!(err.to_string().contains("'status'"));
    }

    #[test]
    fn test_format_is_idempotent() {
        let homework = json!({"status": "reviewing", "homework_name": "proj3"});
        assert_eq!(
            format_status(&homework).unwrap(),
            format_status(&homework).unwrap()
        );
    }

    #[test]
    fn test_parse_round_trips_keys() {
        for status in HomeworkStatus::ALL {
            assert_eq!(HomeworkStatus::parse(status.key()).unwrap(), status);
        }
    }
}
