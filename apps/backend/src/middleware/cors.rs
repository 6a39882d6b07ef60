use actix_cors::Cors;
use actix_web::http::header;

/// Dev-server origins used when none are configured.
pub const DEFAULT_ORIGINS: [&str; 3] = [
    "http://localhost:5173",
    "http://127.0.0.1:5173",
    "http://localhost:3000",
];

/// CORS for the browser frontend. `origins` comes from
/// [`crate::config::AppConfig::allowed_origins`]; an empty list falls back to
/// [`DEFAULT_ORIGINS`].
pub fn cors_middleware(origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![
            header::HeaderName::from_static("x-trace-id"),
            header::HeaderName::from_static("x-request-id"),
        ])
        .max_age(3600);

    if origins.is_empty() {
        for origin in DEFAULT_ORIGINS {
            cors = cors.allowed_origin(origin);
        }
    } else {
        for origin in origins {
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}
