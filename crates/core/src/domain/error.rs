// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("project path must not be empty")]
    EmptyProjectPath,

    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("{field} must fit on one line: {value:?}")]
    MultilineField { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, DomainError>;
