use axum::{Router, routing::get};

use crate::{handlers::home, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::get_home))
        .route("/v1/overview", get(home::get_overview))
}
