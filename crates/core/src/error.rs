use crate::repository::RepositoryError;
use crate::validation::FieldErrors;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(FieldErrors),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
