//! Axum adapter.
//!
//! ```no_run
//! use axum::{Router, routing::get};
//! use bunner_cors_policy::middleware::axum::cors_middleware;
//! use bunner_cors_policy::{Cors, CorsPolicy, Method};
//! use std::sync::Arc;
//!
//! let cors = Arc::new(Cors::new(
//!     CorsPolicy::new()
//!         .allow_origin("https://app.example.com")
//!         .allow_method(Method::Get),
//! ));
//!
//! let app: Router = Router::new()
//!     .route("/greet", get(|| async { "hello" }))
//!     .layer(axum::middleware::from_fn_with_state(cors, cors_middleware));
//! ```

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use super::SharedCors;
use crate::response::CorsResponse;

/// Middleware function for `axum::middleware::from_fn_with_state`.
pub async fn cors_middleware(
    State(cors): State<SharedCors>,
    request: Request,
    next: Next,
) -> Response {
    let decision = cors.check(&request);

    let mut response = if decision.is_preflight() {
        Response::no_content()
    } else {
        next.run(request).await
    };

    decision.apply_to(&mut response);
    response
}
