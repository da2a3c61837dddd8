use crate::constants::header;

/// Read-only view of an inbound request.
///
/// Implementations must look header names up case-insensitively.
pub trait CorsRequest {
    fn method(&self) -> &str;

    fn header(&self, name: &str) -> Option<&str>;

    /// Value of the `Origin` header, or the empty string when absent.
    fn origin(&self) -> &str {
        self.header(header::ORIGIN).unwrap_or_default()
    }
}

/// Framework-independent request made of a method and raw header pairs.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub headers: &'a [(&'a str, &'a str)],
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str, headers: &'a [(&'a str, &'a str)]) -> Self {
        Self { method, headers }
    }
}

impl CorsRequest for RequestContext<'_> {
    fn method(&self) -> &str {
        self.method
    }

    /// First matching header wins.
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    }
}

impl<B> CorsRequest for http::Request<B> {
    fn method(&self) -> &str {
        http::Request::method(self).as_str()
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
    }
}

impl<T: CorsRequest + ?Sized> CorsRequest for &T {
    fn method(&self) -> &str {
        (**self).method()
    }

    fn header(&self, name: &str) -> Option<&str> {
        (**self).header(name)
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
