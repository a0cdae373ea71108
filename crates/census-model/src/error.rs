use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("invalid length of stay: {0}")]
    InvalidLengthOfStay(f64),
    #[error("invalid room token: {0:?}")]
    InvalidRoom(String),
    #[error("unknown column: {0}")]
    UnknownColumn(String),
    #[error("unknown report variant: {0}")]
    UnknownVariant(String),
    #[error("column {0} appears more than once in the sort keys")]
    DuplicateSortColumn(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
