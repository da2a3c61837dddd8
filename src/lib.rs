//! Immutable CORS policies and the logic that turns them into response headers.
//!
//! Build a [`CorsPolicy`] once at startup, wrap it in a [`Cors`], and run every
//! request through [`Cors::handle`] (or one of the framework adapters in
//! [`middleware`]). `OPTIONS` requests are answered with an empty `204`; every
//! other request reaches the wrapped handler and gets the CORS headers added
//! to its response.
//!
//! ```
//! use bunner_cors_policy::{Cors, CorsPolicy, Method, RequestContext};
//!
//! let cors = Cors::new(
//!     CorsPolicy::new()
//!         .allow_origin("http://a.com")
//!         .allow_origin("http://b.com")
//!         .allow_method(Method::Get)
//!         .allow_method(Method::Post),
//! );
//!
//! let request = RequestContext::new("OPTIONS", &[("Origin", "http://a.com")]);
//! let response: http::Response<String> = cors.handle(request, |_| unreachable!());
//!
//! assert_eq!(response.status(), 204);
//! assert_eq!(response.headers()["access-control-allow-origin"], "http://a.com");
//! assert_eq!(response.headers()["vary"], "Origin");
//! assert_eq!(response.headers()["access-control-allow-methods"], "GET,POST");
//! ```

pub mod constants;
mod context;
mod cors;
mod header_builder;
mod headers;
mod method;
pub mod middleware;
mod options;
mod origin;
mod policy;
mod response;
mod result;

pub use context::{CorsRequest, RequestContext};
pub use cors::Cors;
pub use headers::Headers;
pub use method::Method;
pub use middleware::SharedCors;
pub use options::CorsOptions;
pub use origin::{Origin, OriginDecision, OriginError, parse_origin};
pub use policy::CorsPolicy;
pub use response::{CorsResponse, ResponseHeaders};
pub use result::CorsDecision;
