use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorDetail;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up for this activity")]
    AlreadyEnrolled,

    #[error("Participant not found in this activity")]
    ParticipantNotFound,

    #[error("Activity is full")]
    ActivityFull,

    #[error("Email is required")]
    EmailRequired,

    #[error("{0}")]
    InvalidBody(String),
}

impl RosterError {
    pub fn status(&self) -> StatusCode {
        match self {
            RosterError::ActivityNotFound | RosterError::ParticipantNotFound => {
                StatusCode::NOT_FOUND
            }
            RosterError::AlreadyEnrolled
            | RosterError::ActivityFull
            | RosterError::EmailRequired
            | RosterError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let body = ErrorDetail {
            detail: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;

// Raised while building the roster at startup, never by a request.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Duplicate activity in seed: {0}")]
    DuplicateActivity(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Cannot parse listen address {0}")]
    InvalidAddress(String),
}
