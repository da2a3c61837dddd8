use crate::method::Method;
use crate::policy::CorsPolicy;

/// Plain-struct form of a [`CorsPolicy`], convenient when the values come
/// from application configuration.
///
/// Conversion goes through the builder, so malformed origins are logged and
/// skipped exactly as with [`CorsPolicy::allow_origin`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsOptions {
    /// Takes precedence over `origins`.
    pub allow_any_origin: bool,
    pub origins: Vec<String>,
    pub expose_headers: Vec<String>,
    pub max_age: Option<u64>,
    /// Any `Some` value enables `Access-Control-Allow-Credentials: true`.
    pub allow_credentials: Option<bool>,
    pub allow_methods: Vec<Method>,
    pub allow_headers: Vec<String>,
}

impl From<CorsOptions> for CorsPolicy {
    fn from(options: CorsOptions) -> Self {
        let CorsOptions {
            allow_any_origin,
            origins,
            expose_headers,
            max_age,
            allow_credentials,
            allow_methods,
            allow_headers,
        } = options;

        let mut policy = CorsPolicy::new().allow_origins(origins);
        if allow_any_origin {
            policy = policy.allow_any_origin();
        }
        if let Some(seconds) = max_age {
            policy = policy.max_age(seconds);
        }

        policy
            .expose_headers(expose_headers)
            .with_credentials_flag(allow_credentials)
            .allow_methods(allow_methods)
            .allow_headers(allow_headers)
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
