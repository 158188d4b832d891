pub mod health;
pub mod rewrite;
pub mod single_pass;

use crate::error::{AppError, Result};
use actix_web::HttpResponse;

/// `OPTIONS` that reached routing, i.e. not a CORS preflight.
pub async fn options() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Answers any method other than the ones a resource routes.
pub async fn method_not_allowed() -> Result<HttpResponse> {
    Err(AppError::MethodNotAllowed)
}
