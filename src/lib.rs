pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod telemetry;
pub mod web;

pub use config::ServerConfig;
pub use database::{ActivityCatalog, ActivityStore};
pub use error::RosterError;
pub use web::{router, state::AppState};
