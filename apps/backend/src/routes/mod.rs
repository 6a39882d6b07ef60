use actix_web::web;

pub mod chat;
pub mod health;
pub mod rooms;

/// Configure application routes. `main.rs` wraps these with CORS and request
/// tracing; tests mount them as-is.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.configure(health::configure_routes);

    // Game routes: /api/rooms, /api/{room_id}/chat
    cfg.service(
        web::scope("/api")
            .configure(rooms::configure_routes)
            .configure(chat::configure_routes),
    );
}
