use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use rewrite_core::ValidationError;
use serde::Serialize;
use thiserror::Error;

use crate::pipeline::PipelineError;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid request body: {0}")]
    BadRequest(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Rewrite failed")]
    Pipeline(#[from] PipelineError),
}

#[derive(Serialize)]
struct JsonError {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Pipeline(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let details = match self {
            AppError::Pipeline(e) => Some(e.to_string()),
            _ => None,
        };
        HttpResponse::build(self.status_code()).json(JsonError {
            error: self.to_string(),
            details,
        })
    }
}
