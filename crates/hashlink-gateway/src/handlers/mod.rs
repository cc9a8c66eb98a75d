mod health;
mod url;

pub use health::health_handler;
pub use url::{not_found_handler, redirect_handler, shorten_handler};
