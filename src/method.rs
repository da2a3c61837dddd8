use crate::constants::method;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// HTTP method token listed in `Access-Control-Allow-Methods`.
///
/// Method tokens are case-sensitive, so `"get"` parses to
/// [`Method::Custom`] rather than [`Method::Get`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Head,
    Put,
    Delete,
    Trace,
    Connect,
    Options,
    Patch,
    Custom(String),
}

impl Method {
    /// Canonical token emitted on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => method::GET,
            Method::Post => method::POST,
            Method::Head => method::HEAD,
            Method::Put => method::PUT,
            Method::Delete => method::DELETE,
            Method::Trace => method::TRACE,
            Method::Connect => method::CONNECT,
            Method::Options => method::OPTIONS,
            Method::Patch => method::PATCH,
            Method::Custom(token) => token,
        }
    }

    pub fn custom<S: Into<String>>(token: S) -> Self {
        Self::from(token.into())
    }
}

impl From<&str> for Method {
    fn from(value: &str) -> Self {
        match value {
            method::GET => Method::Get,
            method::POST => Method::Post,
            method::HEAD => Method::Head,
            method::PUT => Method::Put,
            method::DELETE => Method::Delete,
            method::TRACE => Method::Trace,
            method::CONNECT => Method::Connect,
            method::OPTIONS => Method::Options,
            method::PATCH => Method::Patch,
            other => Method::Custom(other.to_owned()),
        }
    }
}

impl From<String> for Method {
    fn from(value: String) -> Self {
        match Method::from(value.as_str()) {
            Method::Custom(_) => Method::Custom(value),
            known => known,
        }
    }
}

impl From<&http::Method> for Method {
    fn from(value: &http::Method) -> Self {
        Method::from(value.as_str())
    }
}

impl From<http::Method> for Method {
    fn from(value: http::Method) -> Self {
        Method::from(&value)
    }
}

impl FromStr for Method {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Method::from(s))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "method_test.rs"]
mod method_test;
