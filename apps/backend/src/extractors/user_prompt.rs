use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use serde::Deserialize;

use crate::error::AppError;
use crate::errors::ErrorCode;

#[derive(Debug, Deserialize)]
struct UserPromptQuery {
    #[serde(rename = "userPrompt")]
    user_prompt: String,
}

/// The player's message, read from the `userPrompt` query parameter.
///
/// An empty value is a legitimate (if odd) message; only a missing parameter
/// is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPrompt(pub String);

impl UserPrompt {
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromRequest for UserPrompt {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse(req.query_string()))
    }
}

fn parse(query: &str) -> Result<UserPrompt, AppError> {
    web::Query::<UserPromptQuery>::from_query(query)
        .map(|q| UserPrompt(q.into_inner().user_prompt))
        .map_err(|_| {
            AppError::bad_request(ErrorCode::InvalidPrompt, "Missing userPrompt query parameter")
        })
}
