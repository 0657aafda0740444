pub mod handlers;
pub mod model;
pub mod repo;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(handlers::index))
}
