use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Invalid value for {field}: {value}")]
    InvalidChoice { field: &'static str, value: String },
    #[error("No dialog is open")]
    DialogClosed,
}

pub type DomainResult<T> = Result<T, DomainError>;
