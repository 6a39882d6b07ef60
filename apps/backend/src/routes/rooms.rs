use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/rooms`: every room with a game in progress, transcripts included.
async fn list_rooms(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let mut rooms = app_state.orchestrator().rooms();
    rooms.sort_by_key(|room| room.room_id);
    Ok(HttpResponse::Ok().json(rooms))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/rooms", web::get().to(list_rooms));
}
