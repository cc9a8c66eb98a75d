use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{health_handler, not_found_handler, redirect_handler, shorten_handler};
use crate::state::AppState;

pub const HEALTH_PATH: &str = "/v1/health";
pub const SHORTEN_PATH: &str = "/v1/short";
pub const REDIRECT_PATH: &str = "/{code}";

pub struct App;

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route(HEALTH_PATH, get(health_handler))
            .route(SHORTEN_PATH, post(shorten_handler))
            .route(REDIRECT_PATH, get(redirect_handler))
            .fallback(not_found_handler)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
