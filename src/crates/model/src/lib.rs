pub mod country;
pub mod gold_medal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid column value: {0}")]
    InvalidValue(String),
}

impl From<domain::ValueError> for ModelError {
    fn from(err: domain::ValueError) -> Self {
        ModelError::InvalidValue(err.to_string())
    }
}
