use axum::{routing::get, Router};

use crate::controller::health::home;

pub fn router() -> Router {
    Router::new().route("/", get(home))
}
