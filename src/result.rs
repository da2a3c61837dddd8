use crate::constants::header;
use crate::headers::{Headers, merge_vary};
use crate::response::ResponseHeaders;

/// Outcome of classifying a request against a policy, carrying the headers
/// to attach to the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    /// `OPTIONS` request, answered with an empty `204`. The wrapped handler
    /// must not run.
    Preflight(Headers),
    /// Any other method, handled by the wrapped handler.
    Actual(Headers),
}

impl CorsDecision {
    pub fn headers(&self) -> &Headers {
        match self {
            CorsDecision::Preflight(headers) | CorsDecision::Actual(headers) => headers,
        }
    }

    pub fn into_headers(self) -> Headers {
        match self {
            CorsDecision::Preflight(headers) | CorsDecision::Actual(headers) => headers,
        }
    }

    pub fn is_preflight(&self) -> bool {
        matches!(self, CorsDecision::Preflight(_))
    }

    /// Writes the decided headers onto `response`. `Vary` is merged with any
    /// value the handler already set; every other header is replaced.
    pub fn apply_to<R: ResponseHeaders + ?Sized>(&self, response: &mut R) {
        for (name, value) in self.headers() {
            if name.eq_ignore_ascii_case(header::VARY) {
                if let Some(merged) = merge_vary(response.header(name).as_deref(), value) {
                    response.set_header(name, &merged);
                }
            } else {
                response.set_header(name, value);
            }
        }
    }
}

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;
