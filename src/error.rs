use crate::repository;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Missing JSON in request")]
    MissingJson,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid date, must use this format YYYY-MM-DDTHH:MM:SSZ, example 2025-08-31T20:00:00Z")]
    InvalidTimeFormat,

    #[error("Date cannot be in the past")]
    TimeInPast,

    #[error("Invalid ticket ID format")]
    InvalidTicketId,

    #[error("Ticket not exist")]
    TicketNotExist,

    #[error("Ticket not exist or already used")]
    TicketNotExistOrUsed,

    #[error("Ticket not exist or already deleted")]
    TicketNotExistOrDeleted,

    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        let status = match &self {
            Error::MissingJson
            | Error::MissingField(_)
            | Error::InvalidTimeFormat
            | Error::TimeInPast
            | Error::InvalidTicketId => StatusCode::BAD_REQUEST,
            Error::TicketNotExist
            | Error::TicketNotExistOrUsed
            | Error::TicketNotExistOrDeleted => StatusCode::NOT_FOUND,
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // database error details stay in the logs
        let error = match self {
            Error::Database(_) => "Internal server error".to_string(),
            err => err.to_string(),
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}
