//! Migration request model and required-field validation.

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// The required fields of a [`MigrationRequest`], in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MigrationField {
    DashboardName,
    SourcePath,
    DestinationPath,
}

impl MigrationField {
    /// Every required field, in the order violations are reported.
    pub const ALL: [MigrationField; 3] = [
        MigrationField::DashboardName,
        MigrationField::SourcePath,
        MigrationField::DestinationPath,
    ];

    /// Wire name of the field as it appears in the JSON body.
    pub fn as_str(self) -> &'static str {
        match self {
            MigrationField::DashboardName => "dashboard_name",
            MigrationField::SourcePath => "source_path",
            MigrationField::DestinationPath => "destination_path",
        }
    }
}

impl fmt::Display for MigrationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a required field was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// Key absent from the payload, or `null`.
    Missing,
    /// Present but empty or whitespace-only.
    Blank,
}

/// A single required-field violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: MigrationField,
    pub kind: ViolationKind,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ViolationKind::Missing => write!(f, "{} is required", self.field),
            ViolationKind::Blank => write!(f, "{} must not be empty", self.field),
        }
    }
}

/// A migration request refused because one or more required fields were
/// missing or blank.
///
/// Always holds at least one violation, ordered as [`MigrationField::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid migration request: {}", join_violations(.violations))]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Wire names of the offending fields.
    pub fn fields(&self) -> Vec<&'static str> {
        self.violations.iter().map(|v| v.field.as_str()).collect()
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Payload of `POST /migrate`.
///
/// Fields are optional at the type level so an absent key can be told apart
/// from an empty string; [`MigrationRequest::validate`] enforces presence.
/// Deserializes from a map only: sequences are refused rather than read by
/// position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationRequest {
    pub dashboard_name: Option<String>,
    pub source_path: Option<String>,
    pub destination_path: Option<String>,
}

impl MigrationRequest {
    /// Build a request with all three fields present.
    pub fn new(
        dashboard_name: impl Into<String>,
        source_path: impl Into<String>,
        destination_path: impl Into<String>,
    ) -> Self {
        Self {
            dashboard_name: Some(dashboard_name.into()),
            source_path: Some(source_path.into()),
            destination_path: Some(destination_path.into()),
        }
    }

    /// Check that every required field is present and non-blank.
    ///
    /// All fields are checked; the error lists every violation, not only the
    /// first. Values are not trimmed or normalized in the accepted output.
    pub fn validate(&self) -> Result<ValidatedMigration<'_>, ValidationError> {
        let mut violations = Vec::new();

        let dashboard_name = require(
            MigrationField::DashboardName,
            self.dashboard_name.as_deref(),
            &mut violations,
        );
        let source_path = require(
            MigrationField::SourcePath,
            self.source_path.as_deref(),
            &mut violations,
        );
        let destination_path = require(
            MigrationField::DestinationPath,
            self.destination_path.as_deref(),
            &mut violations,
        );

        match (dashboard_name, source_path, destination_path) {
            (Some(dashboard_name), Some(source_path), Some(destination_path)) => {
                Ok(ValidatedMigration {
                    dashboard_name,
                    source_path,
                    destination_path,
                })
            }
            _ => Err(ValidationError { violations }),
        }
    }
}

impl<'de> Deserialize<'de> for MigrationRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(MigrationRequestVisitor)
    }
}

struct MigrationRequestVisitor;

impl<'de> Visitor<'de> for MigrationRequestVisitor {
    type Value = MigrationRequest;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object with dashboard_name, source_path and destination_path")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut dashboard_name = None;
        let mut source_path = None;
        let mut destination_path = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "dashboard_name" => fill(&mut map, &mut dashboard_name, "dashboard_name")?,
                "source_path" => fill(&mut map, &mut source_path, "source_path")?,
                "destination_path" => {
                    fill(&mut map, &mut destination_path, "destination_path")?
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(MigrationRequest {
            dashboard_name: dashboard_name.flatten(),
            source_path: source_path.flatten(),
            destination_path: destination_path.flatten(),
        })
    }
}

/// Read one field value; `null` is kept as `Some(None)` so a repeated key is
/// still caught.
fn fill<'de, A>(
    map: &mut A,
    slot: &mut Option<Option<String>>,
    field: &'static str,
) -> Result<(), A::Error>
where
    A: MapAccess<'de>,
{
    if slot.is_some() {
        return Err(de::Error::duplicate_field(field));
    }
    *slot = Some(map.next_value()?);
    Ok(())
}

fn require<'a>(
    field: MigrationField,
    value: Option<&'a str>,
    violations: &mut Vec<FieldViolation>,
) -> Option<&'a str> {
    let kind = match value {
        Some(v) if !v.trim().is_empty() => return Some(v),
        Some(_) => ViolationKind::Blank,
        None => ViolationKind::Missing,
    };
    violations.push(FieldViolation { field, kind });
    None
}

/// A request that passed validation. Only obtainable through
/// [`MigrationRequest::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedMigration<'a> {
    dashboard_name: &'a str,
    source_path: &'a str,
    destination_path: &'a str,
}

impl<'a> ValidatedMigration<'a> {
    pub fn dashboard_name(&self) -> &'a str {
        self.dashboard_name
    }

    pub fn source_path(&self) -> &'a str {
        self.source_path
    }

    pub fn destination_path(&self) -> &'a str {
        self.destination_path
    }
}
