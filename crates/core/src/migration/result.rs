//! Outcome of a migration submission.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MigrationStatus {
    Accepted,
    Rejected,
}

/// Response body of `POST /migrate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationResult {
    pub status: MigrationStatus,
    pub message: String,
}

impl MigrationResult {
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            status: MigrationStatus::Accepted,
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            status: MigrationStatus::Rejected,
            message: message.into(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.status == MigrationStatus::Accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_value(MigrationResult::rejected("nope")).unwrap();

        assert_eq!(json, serde_json::json!({ "status": "rejected", "message": "nope" }));
    }

    #[test]
    fn accepted_reports_accepted() {
        assert!(MigrationResult::accepted("ok").is_accepted());
        assert!(!MigrationResult::rejected("no").is_accepted());
    }
}
