use std::io;

use actix_cors::Cors;
use actix_web::{
    http::{header, Method},
    middleware::Logger,
    web, App, HttpServer,
};

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::handlers;
use crate::state::AppState;

/// Largest accepted JSON body. Fields are capped far below this after sanitizing.
const JSON_BODY_LIMIT: usize = 256 * 1024;

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req| {
            log::warn!("Rejected request body: {}", err);
            AppError::BadRequest(err.to_string()).into()
        })
}

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::resource("/rewrite")
                .route(web::post().to(handlers::rewrite::handler))
                .route(web::method(Method::OPTIONS).to(handlers::options))
                .default_service(web::to(handlers::method_not_allowed)),
        )
        .service(
            web::resource("/api/rewrite")
                .route(web::post().to(handlers::single_pass::handler))
                .route(web::method(Method::OPTIONS).to(handlers::options))
                .default_service(web::to(handlers::method_not_allowed)),
        )
        .route("/health", web::get().to(handlers::health::handler));
}

/// Any origin; GET, POST and OPTIONS; only the `Content-Type` request header.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(3600)
}

pub async fn run_server(config: ServerConfig) -> io::Result<()> {
    let state = web::Data::new(AppState::from_config(&config));
    let bind_address = config.bind_address();

    log::info!("Starting rewrite server on http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(cors())
            .wrap(Logger::default())
            .configure(app_config)
    })
    .bind(bind_address)?
    .run()
    .await
}
