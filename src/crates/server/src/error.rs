use actix_web::{http::StatusCode, HttpResponse};
use application::query::QueryError;
use log::error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("{0}")]
    Internal(String),
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::InvalidArgument(msg) => ApiError::InvalidArgument(msg),
            QueryError::InvalidSortKey(_) => ApiError::InvalidArgument(err.to_string()),
            QueryError::DbError(_) | QueryError::ExecutionError(_) => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}

impl actix_web::error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        if let Self::Internal(message) = self {
            // 不把内部错误细节返回给客户端
            error!("request failed: {}", message);
            return HttpResponse::build(self.status_code()).body("Internal server error");
        }
        HttpResponse::build(self.status_code()).body(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_status_codes() {
        let err: ApiError = QueryError::InvalidArgument("bad".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "bad");

        let err: ApiError = QueryError::DbError("connection reset".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let err: ApiError = QueryError::InvalidSortKey("medals".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
