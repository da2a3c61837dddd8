//! Actix Web adapter.
//!
//! ```no_run
//! use actix_web::{App, HttpResponse, web};
//! use bunner_cors_policy::middleware::actix::CorsMiddleware;
//! use bunner_cors_policy::{Cors, CorsPolicy};
//! use std::sync::Arc;
//!
//! let cors = Arc::new(Cors::new(CorsPolicy::new().allow_any_origin()));
//! let app = App::new()
//!     .wrap(CorsMiddleware::new(cors))
//!     .route("/greet", web::get().to(|| async { HttpResponse::Ok().body("hello") }));
//! ```

use std::future::{Future, Ready, ready};
use std::pin::Pin;
use std::task::{Context, Poll};

use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue};
use actix_web::{Error, HttpRequest, HttpResponse};

use super::SharedCors;
use crate::context::CorsRequest;
use crate::response::{CorsResponse, ResponseHeaders, join_lines};

type LocalBoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// `Transform` registered with `App::wrap`.
pub struct CorsMiddleware {
    cors: SharedCors,
}

impl CorsMiddleware {
    pub fn new(cors: SharedCors) -> Self {
        Self { cors }
    }
}

impl<S, B> Transform<S, ServiceRequest> for CorsMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = CorsMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CorsMiddlewareService {
            service,
            cors: self.cors.clone(),
        }))
    }
}

pub struct CorsMiddlewareService<S> {
    service: S,
    cors: SharedCors,
}

impl<S, B> Service<ServiceRequest> for CorsMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let decision = self.cors.check(&req);

        if decision.is_preflight() {
            let mut response = <HttpResponse as CorsResponse>::no_content();
            decision.apply_to(&mut response);
            let response: Self::Response = req.into_response(response.map_into_right_body());
            return Box::pin(async move { Ok(response) });
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            let mut response = fut.await?.map_into_left_body();
            decision.apply_to(&mut response);
            Ok(response)
        })
    }
}

impl CorsRequest for ServiceRequest {
    fn method(&self) -> &str {
        ServiceRequest::method(self).as_str()
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
    }
}

impl CorsRequest for HttpRequest {
    fn method(&self) -> &str {
        HttpRequest::method(self).as_str()
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
    }
}

impl ResponseHeaders for HeaderMap {
    fn header(&self, name: &str) -> Option<String> {
        join_lines(self.get_all(name).map(HeaderValue::to_str))
    }

    fn set_header(&mut self, name: &str, value: &str) {
        match (HeaderName::try_from(name), HeaderValue::from_str(value)) {
            (Ok(name), Ok(value)) => {
                self.insert(name, value);
            }
            _ => tracing::warn!(name, value, "skipping unrepresentable CORS header"),
        }
    }
}

impl<B> ResponseHeaders for HttpResponse<B> {
    fn header(&self, name: &str) -> Option<String> {
        self.headers().header(name)
    }

    fn set_header(&mut self, name: &str, value: &str) {
        self.headers_mut().set_header(name, value);
    }
}

impl<B> ResponseHeaders for ServiceResponse<B> {
    fn header(&self, name: &str) -> Option<String> {
        self.headers().header(name)
    }

    fn set_header(&mut self, name: &str, value: &str) {
        self.headers_mut().set_header(name, value);
    }
}

impl CorsResponse for HttpResponse {
    fn no_content() -> Self {
        HttpResponse::NoContent().finish()
    }
}
