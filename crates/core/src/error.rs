use crate::migration::ValidationError;

/// Domain-level error raised by `migrator-core`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
