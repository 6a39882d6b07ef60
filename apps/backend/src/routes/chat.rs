use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use tracing::debug;

use crate::error::AppError;
use crate::extractors::{RoomIdParam, UserPrompt};
use crate::state::AppState;

/// `POST /api/{room_id}/chat?userPrompt=...`
///
/// Plays one turn and answers with the model's reply as plain text.
async fn chat(
    room: RoomIdParam,
    prompt: UserPrompt,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let RoomIdParam(room_id) = room;
    let user_text = prompt.into_inner();
    debug!(room_id, user_text_len = user_text.chars().count(), "chat_request");

    let reply = app_state
        .orchestrator()
        .take_turn(room_id, &user_text)
        .await?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(reply))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{room_id}/chat", web::post().to(chat));
}
