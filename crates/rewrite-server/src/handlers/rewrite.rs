use actix_web::{web, HttpResponse};
use rewrite_core::{RewriteInput, RewriteRequest};

use crate::error::Result;
use crate::state::AppState;

/// `POST /rewrite`: the full multi-pass rewrite.
pub async fn handler(
    state: web::Data<AppState>,
    req: web::Json<RewriteRequest>,
) -> Result<HttpResponse> {
    let input = RewriteInput::from_request(&req)?;
    log::info!(
        "Rewrite request received ({} chars, tone: {})",
        input.text.chars().count(),
        input.tone_hint
    );

    let mut rng = state.request_rng();
    let output = state
        .pipeline()
        .run(&input, &mut rng)
        .await
        .map_err(|e| {
            log::error!("Rewrite error: {}", e);
            e
        })?;

    Ok(HttpResponse::Ok().json(output))
}
