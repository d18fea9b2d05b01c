//! Simulated dashboard migration.
//!
//! A migration request names a dashboard and two paths. Submission checks
//! that all three are present and non-blank and returns a synthetic outcome.
//! Nothing is read, written, or contacted: the migration is only simulated.

pub mod request;
pub mod result;

pub use request::{
    FieldViolation, MigrationField, MigrationRequest, ValidatedMigration, ValidationError,
    ViolationKind,
};
pub use result::{MigrationResult, MigrationStatus};

/// Produce the accepted outcome for a validated request.
pub fn simulate(migration: &ValidatedMigration<'_>) -> MigrationResult {
    MigrationResult::accepted(format!(
        "Dashboard '{}' migration simulated from {} to {}",
        migration.dashboard_name(),
        migration.source_path(),
        migration.destination_path(),
    ))
}

/// Validate a request and simulate it, keeping validation failure as a typed
/// error so callers can report the offending fields.
pub fn try_submit_migration(
    request: &MigrationRequest,
) -> Result<MigrationResult, ValidationError> {
    request.validate().map(|migration| simulate(&migration))
}

/// Submit a migration request, folding validation failure into a rejected
/// result.
pub fn submit_migration(request: &MigrationRequest) -> MigrationResult {
    try_submit_migration(request)
        .unwrap_or_else(|err| MigrationResult::rejected(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_message_mentions_name_and_paths() {
        let result = submit_migration(&MigrationRequest::new("Sales Dashboard", "/a", "/b"));

        assert_eq!(result.status, MigrationStatus::Accepted);
        assert_eq!(
            result.message,
            "Dashboard 'Sales Dashboard' migration simulated from /a to /b"
        );
    }

    #[test]
    fn empty_name_is_rejected() {
        let result = submit_migration(&MigrationRequest::new("", "/a", "/b"));

        assert_eq!(result.status, MigrationStatus::Rejected);
        assert!(result.message.contains("dashboard_name"));
        assert!(!result.message.contains("source_path"));
    }

    #[test]
    fn missing_destination_is_rejected() {
        let request = MigrationRequest {
            destination_path: None,
            ..MigrationRequest::new("Sales", "/a", "/b")
        };
        let result = submit_migration(&request);

        assert_eq!(result.status, MigrationStatus::Rejected);
        assert!(result.message.contains("destination_path"));
    }

    #[test]
    fn all_empty_names_all_fields() {
        let result = submit_migration(&MigrationRequest::new("", "", ""));

        assert_eq!(result.status, MigrationStatus::Rejected);
        for field in MigrationField::ALL {
            assert!(
                result.message.contains(field.as_str()),
                "message should name {field}: {}",
                result.message
            );
        }
    }

    #[test]
    fn try_submit_keeps_the_typed_error() {
        let err = try_submit_migration(&MigrationRequest::new("Sales", "", "/b")).unwrap_err();
        assert_eq!(err.fields(), ["source_path"]);

        let folded = submit_migration(&MigrationRequest::new("Sales", "", "/b"));
        assert_eq!(folded, MigrationResult::rejected(err.to_string()));
    }

    #[test]
    fn submission_is_idempotent() {
        let accepted = MigrationRequest::new("Finance", "/x/y", "/z");
        let rejected = MigrationRequest::new(" ", "/x/y", "");

        assert_eq!(submit_migration(&accepted), submit_migration(&accepted));
        assert_eq!(submit_migration(&rejected), submit_migration(&rejected));
    }

    #[test]
    fn paths_are_reproduced_verbatim() {
        let result = submit_migration(&MigrationRequest::new(
            "Q3 Revenue",
            "C:\\reports\\q3.twbx",
            "projects/finance/q3 final.twbx",
        ));

        assert!(result.is_accepted());
        assert!(result.message.contains("Q3 Revenue"));
        assert!(result.message.contains("C:\\reports\\q3.twbx"));
        assert!(result.message.contains("projects/finance/q3 final.twbx"));
    }
}
