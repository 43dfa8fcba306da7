use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("user {0} not found")]
    NotFound(String),

    #[error("{0}")]
    MalformedBody(String),
}
