use thiserror::Error;

pub mod dao;
pub mod get_countries;
pub mod get_country_details;
pub mod get_country_medals;
pub mod shared;
pub mod sort;

#[cfg(test)]
mod fixtures;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// 存储层不认识的排序字段，由上层决定是回退还是转换为参数错误
    #[error("Invalid sort key: {0}")]
    InvalidSortKey(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Execution error: {0}")]
    ExecutionError(String),
    #[error("Database error: {0}")]
    DbError(String),
}

impl From<model::ModelError> for QueryError {
    fn from(err: model::ModelError) -> Self {
        QueryError::ExecutionError(err.to_string())
    }
}
