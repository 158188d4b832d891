use actix_web::{web, HttpResponse};
use rewrite_core::{RewriteInput, RewriteRequest};

use crate::error::Result;
use crate::state::AppState;

/// `POST /api/rewrite`: one completion call plus light texture.
pub async fn handler(
    state: web::Data<AppState>,
    req: web::Json<RewriteRequest>,
) -> Result<HttpResponse> {
    let input = RewriteInput::from_request(&req)?;
    log::info!(
        "Single-pass rewrite request received ({} chars)",
        input.text.chars().count()
    );

    let mut rng = state.request_rng();
    let output = state
        .pipeline()
        .run_single_pass(&input, &mut rng)
        .await
        .map_err(|e| {
            log::error!("Single-pass rewrite error: {}", e);
            e
        })?;

    Ok(HttpResponse::Ok().json(output))
}
