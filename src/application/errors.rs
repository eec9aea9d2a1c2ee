//! Error type shared by the news and taxonomy use cases

use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::application::token::TokenError;
use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Invalid token: {0}")]
    Token(#[from] TokenError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}
