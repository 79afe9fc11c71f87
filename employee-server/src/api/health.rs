//! Liveness endpoints

use shared::ApiResponse;

pub async fn root() -> &'static str {
    "you are on /"
}

pub async fn api_root() -> &'static str {
    "you are on /api"
}

pub async fn health_check() -> ApiResponse<()> {
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Health check");
    ApiResponse::ok_with_message("employee service is up and running")
}
