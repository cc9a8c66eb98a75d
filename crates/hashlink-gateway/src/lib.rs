//! HTTP boundary of the hashlink URL shortener.
//!
//! Routes `POST /v1/short` to the shortener and `GET /{code}` to the
//! redirector, and translates their results into HTTP responses.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use error::AppError;
pub use state::AppState;
