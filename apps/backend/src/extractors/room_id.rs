use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::domain::RoomId;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Room id taken from the `{room_id}` path segment.
///
/// Any `i64` is accepted. Rooms are created lazily, so there is nothing to
/// look up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomIdParam(pub RoomId);

impl FromRequest for RoomIdParam {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse(req.match_info().get("room_id")))
    }
}

fn parse(raw: Option<&str>) -> Result<RoomIdParam, AppError> {
    let raw = raw.ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidRoomId, "Missing room_id parameter")
    })?;

    raw.parse::<RoomId>().map(RoomIdParam).map_err(|_| {
        AppError::bad_request(ErrorCode::InvalidRoomId, format!("Invalid room id: {raw}"))
    })
}
