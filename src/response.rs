use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};

/// Mutable access to the headers of an outgoing response.
pub trait ResponseHeaders {
    /// Current value of `name`, looked up case-insensitively. Repeated field
    /// lines are combined into one comma-separated value.
    fn header(&self, name: &str) -> Option<String>;

    /// Sets `name` to `value`, replacing every previous line of `name`.
    fn set_header(&mut self, name: &str, value: &str);
}

/// A response type that can answer a preflight request on its own.
pub trait CorsResponse: ResponseHeaders + Sized {
    /// `204 No Content` with an empty body.
    fn no_content() -> Self;
}

impl ResponseHeaders for HeaderMap {
    fn header(&self, name: &str) -> Option<String> {
        join_lines(self.get_all(name).iter().map(HeaderValue::to_str))
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

/// Combines the textual lines of one header, skipping lines that are not
/// visible ASCII. Returns `None` when no line remains.
pub(crate) fn join_lines<'a, I, E>(lines: I) -> Option<String>
where
    I: IntoIterator<Item = Result<&'a str, E>>,
{
    let lines: Vec<&str> = lines.into_iter().filter_map(Result::ok).collect();
    if lines.is_empty() {
        None
    } else {
        Some(lines.join(", "))
    }
}

impl<B> ResponseHeaders for http::Response<B> {
    fn header(&self, name: &str) -> Option<String> {
        self.headers().header(name)
    }

    fn set_header(&mut self, name: &str, value: &str) {
        self.headers_mut().set_header(name, value);
    }
}

impl<B: Default> CorsResponse for http::Response<B> {
    fn no_content() -> Self {
        let mut response = http::Response::new(B::default());
        *response.status_mut() = StatusCode::NO_CONTENT;
        response
    }
}

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;
