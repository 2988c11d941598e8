pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::categorize::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .nest("/api/gemini", categorize_routes())
        .with_state(state)
}

fn categorize_routes() -> Router<AppState> {
    Router::new()
        .route("/zero-shot", post(handlers::handle_zero_shot))
        .route("/one-shot", post(handlers::handle_one_shot))
        .route("/multi-shot", post(handlers::handle_multi_shot))
        .route("/dynamic", post(handlers::handle_dynamic))
        .route("/similarity", post(handlers::handle_similarity))
        .route("/cot", post(handlers::handle_chain_of_thought))
}
