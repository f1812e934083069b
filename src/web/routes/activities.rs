use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::database::activity_store::ActivityCatalog;
use crate::error::RosterError;
use crate::models::{MessageResponse, SignupRequest};
use crate::services::roster_service;
use crate::web::state::AppState;

pub async fn list_activities_handler(State(state): State<AppState>) -> Json<ActivityCatalog> {
    Json(roster_service::list_activities(&state.store))
}

// Path segments arrive percent-decoded from the extractor.
pub async fn signup_handler(
    Path(activity_name): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, RosterError> {
    let Json(body) = payload.map_err(|e| RosterError::InvalidBody(e.body_text()))?;
    roster_service::signup(&state.store, &activity_name, &body.email).map(Json)
}

pub async fn withdraw_handler(
    Path((activity_name, email)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, RosterError> {
    roster_service::withdraw(&state.store, &activity_name, &email).map(Json)
}
