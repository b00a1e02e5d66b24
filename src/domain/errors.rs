use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Internal error: {0}")]
    Internal(String),
}
