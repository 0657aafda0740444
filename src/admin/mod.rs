pub mod handlers;
pub mod product;
pub mod resource;
pub mod site;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin", get(handlers::admin_index))
        .route(
            "/admin/:model",
            get(handlers::change_list).post(handlers::create),
        )
        .route("/admin/:model/new", get(handlers::new_form))
        .route(
            "/admin/:model/:id",
            get(handlers::edit_form).post(handlers::update),
        )
        .route("/admin/:model/:id/delete", post(handlers::remove))
}
