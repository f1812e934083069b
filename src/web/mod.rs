use axum::{
    routing::{delete, get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub mod routes;
pub mod state;

use routes::activities;
use state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/activities", get(activities::list_activities_handler))
        .route(
            "/api/activities/:activity_name/signup",
            post(activities::signup_handler),
        )
        .route(
            "/api/activities/:activity_name/participants/:email",
            delete(activities::withdraw_handler),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .with_state(state)
}
