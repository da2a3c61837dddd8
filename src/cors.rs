use crate::constants::method;
use crate::context::CorsRequest;
use crate::header_builder::HeaderBuilder;
use crate::headers::Headers;
use crate::policy::CorsPolicy;
use crate::response::CorsResponse;
use crate::result::CorsDecision;

/// Applies a [`CorsPolicy`] to requests and responses.
///
/// `Cors` holds no mutable state; share one instance across threads with an
/// `Arc`.
#[derive(Clone, Debug, Default)]
pub struct Cors {
    policy: CorsPolicy,
}

impl Cors {
    pub fn new(policy: impl Into<CorsPolicy>) -> Self {
        Self {
            policy: policy.into(),
        }
    }

    pub fn policy(&self) -> &CorsPolicy {
        &self.policy
    }

    /// Classifies the request and computes the headers to attach.
    pub fn check<R: CorsRequest + ?Sized>(&self, request: &R) -> CorsDecision {
        let headers = self.headers_for(request.origin());

        if request.method() == method::OPTIONS {
            tracing::debug!(origin = request.origin(), "short-circuiting CORS preflight");
            CorsDecision::Preflight(headers)
        } else {
            CorsDecision::Actual(headers)
        }
    }

    /// Headers for a request whose `Origin` is `request_origin`; pass the empty
    /// string when the header was absent.
    pub fn headers_for(&self, request_origin: &str) -> Headers {
        HeaderBuilder::new(&self.policy)
            .build(request_origin)
            .into_headers()
    }

    /// Runs one request through the policy.
    ///
    /// Preflight requests get an empty `204` and never reach `handler`. All
    /// other requests are passed to `handler` and its response is returned
    /// with the CORS headers added.
    pub fn handle<Req, Res, F>(&self, request: Req, handler: F) -> Res
    where
        Req: CorsRequest,
        Res: CorsResponse,
        F: FnOnce(Req) -> Res,
    {
        let decision = self.check(&request);
        let mut response = match decision {
            CorsDecision::Preflight(_) => Res::no_content(),
            CorsDecision::Actual(_) => handler(request),
        };
        decision.apply_to(&mut response);
        response
    }
}

impl From<CorsPolicy> for Cors {
    fn from(policy: CorsPolicy) -> Self {
        Self::new(policy)
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
