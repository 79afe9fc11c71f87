//! HTTP routes for employee-server

pub mod employee;
pub mod health;

use std::future::Future;

use axum::Router;
use axum::routing::{delete, get, post, put};
use http::{HeaderName, HeaderValue};
use shared::error::AppError;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::error::ServiceResult;
use crate::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID generator (UUID v4)
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Create the router with every route, middleware and the shared state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/api", get(health::api_root))
        .route("/api/", get(health::api_root))
        .route("/api/healthchecker", get(health::health_check))
        // The misspelling is part of the public contract
        .route("/api/CreateEmpolyee", post(employee::create))
        .route("/api/GetEmployeeById/{id}", get(employee::get_by_id))
        .route("/api/UpdateEmployee", put(employee::update))
        .route("/api/DeleteEmployee/{id}", delete(employee::delete))
        .route("/api/GetAllEmployees/{page}/{limit}", get(employee::list))
        .fallback(route_not_found)
        .with_state(state)
        // Trace - request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Request ID - generate unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
}

async fn route_not_found() -> AppError {
    AppError::not_found("route")
}

/// Run one gateway call on its own task and wait for it
///
/// A panic inside the call comes back as `ServiceError::Dispatch`.
pub(crate) async fn dispatch<T, F>(call: F) -> ServiceResult<T>
where
    T: Send + 'static,
    F: Future<Output = ServiceResult<T>> + Send + 'static,
{
    tokio::spawn(call).await?
}
