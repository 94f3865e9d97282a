use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("nums are required")]
    MissingInput,

    #[error("invalid number received")]
    InvalidInput,

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

impl StatsError {
    /// HTTP status code the failure maps to.
    pub fn status_code(&self) -> u16 {
        match self {
            StatsError::MissingInput | StatsError::InvalidInput => 400,
            StatsError::UnknownOperation(_) => 404,
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
