use std::fmt;

use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Team,
    Driver,
    Track,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Team => write!(f, "Team"),
            Self::Driver => write!(f, "Driver"),
            Self::Track => write!(f, "Track"),
        }
    }
}

#[derive(Debug, Error)]
pub enum LeagueError {
    #[error("{kind} name already in use: {name}")]
    DuplicateName { kind: EntityKind, name: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No eligible drivers to run a season")]
    NoEligibleDrivers,

    #[error("Snapshot encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Corrupt snapshot: {0}")]
    CorruptSnapshot(String),
}

pub type Result<T> = std::result::Result<T, LeagueError>;

impl LeagueError {
    pub fn is_duplicate_name(&self) -> bool {
        matches!(self, LeagueError::DuplicateName { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LeagueError::NotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, LeagueError::Validation(_))
    }
}

impl From<ValidationErrors> for LeagueError {
    fn from(errors: ValidationErrors) -> Self {
        let mut details = Vec::new();
        collect_field_errors("", &errors, &mut details);
        details.sort();
        Self::Validation(details.join("; "))
    }
}

// Nested structs (driver stats) report under "stats.<field>".
fn collect_field_errors(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = format!("{}{}", prefix, field);
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(field_errors.iter().map(|e| {
                    format!(
                        "{}: {}",
                        path,
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    )
                }));
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_field_errors(&format!("{}.", path), nested, out);
            }
            ValidationErrorsKind::List(items) => {
                for (idx, nested) in items {
                    collect_field_errors(&format!("{}[{}].", path, idx), nested, out);
                }
            }
        }
    }
}
