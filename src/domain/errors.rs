use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid news status: {0}")]
    InvalidStatus(i32),

    #[error("News title cannot be empty")]
    EmptyTitle,

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Invalid id: {0}")]
    InvalidId(i64),
}
