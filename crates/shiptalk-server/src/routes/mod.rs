pub mod chat_tools;
pub mod tools;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn configure(state: AppState) -> Router {
    Router::new()
        .merge(chat_tools::routes(state.clone()))
        .merge(tools::routes(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
