use crate::method::Method;
use crate::origin::{Origin, OriginError, parse_origin};
use indexmap::IndexSet;

/// Declarative CORS configuration.
///
/// Every builder method consumes the policy and returns the updated value, so
/// a policy shared behind an `Arc` can never change underneath a request.
/// The default policy injects no headers at all.
///
/// ```
/// use bunner_cors_policy::{CorsPolicy, Method};
///
/// let policy = CorsPolicy::new()
///     .allow_origin("https://app.example.com")
///     .allow_origin("https://admin.example.com")
///     .allow_method(Method::Get)
///     .allow_method(Method::Post)
///     .max_age(600);
///
/// assert_eq!(policy.allowed_methods().count(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsPolicy {
    allow_origin: Option<Origin>,
    expose_headers: IndexSet<String>,
    max_age: Option<u64>,
    allow_credentials: Option<bool>,
    allow_methods: IndexSet<Method>,
    allow_headers: IndexSet<String>,
}

impl CorsPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allows every origin. Any previously listed origins are discarded.
    pub fn allow_any_origin(mut self) -> Self {
        self.allow_origin = Some(Origin::Any);
        self
    }

    /// Adds an origin to the allow-list.
    ///
    /// Malformed origins are logged and ignored; the policy is returned
    /// unchanged. Use [`CorsPolicy::try_allow_origin`] to handle the error.
    pub fn allow_origin(self, origin: impl AsRef<str>) -> Self {
        let origin = origin.as_ref();
        match parse_origin(origin) {
            Ok(origin) => self.insert_origin(origin),
            Err(err) => {
                tracing::warn!(origin, error = %err, "ignoring malformed CORS origin");
                self
            }
        }
    }

    /// Like [`CorsPolicy::allow_origin`] but reports malformed input.
    pub fn try_allow_origin(self, origin: impl AsRef<str>) -> Result<Self, OriginError> {
        let origin = parse_origin(origin.as_ref())?;
        Ok(self.insert_origin(origin))
    }

    pub fn allow_origins<I, S>(self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        origins
            .into_iter()
            .fold(self, |policy, origin| policy.allow_origin(origin))
    }

    fn insert_origin(mut self, origin: &str) -> Self {
        self.allow_origin = match self.allow_origin.take() {
            Some(current) => Some(current.with(origin)),
            None => Origin::list([origin]),
        };
        self
    }

    pub fn expose_header(mut self, name: impl Into<String>) -> Self {
        self.expose_headers.insert(name.into());
        self
    }

    pub fn expose_headers<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .fold(self, |policy, name| policy.expose_header(name))
    }

    /// Preflight cache duration in seconds. The last call wins.
    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    /// Emits `Access-Control-Allow-Credentials: true` on every response.
    /// There is no way to switch it back off within a build chain.
    pub fn allow_credentials(mut self) -> Self {
        self.allow_credentials = Some(true);
        self
    }

    pub fn allow_method(mut self, method: impl Into<Method>) -> Self {
        self.allow_methods.insert(method.into());
        self
    }

    pub fn allow_methods<I, M>(self, methods: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Method>,
    {
        methods
            .into_iter()
            .fold(self, |policy, method| policy.allow_method(method))
    }

    pub fn allow_header(mut self, name: impl Into<String>) -> Self {
        self.allow_headers.insert(name.into());
        self
    }

    pub fn allow_headers<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .fold(self, |policy, name| policy.allow_header(name))
    }

    /// Stores the raw credentials flag. Only its presence affects the
    /// emitted headers.
    pub(crate) fn with_credentials_flag(mut self, flag: Option<bool>) -> Self {
        if flag.is_some() {
            self.allow_credentials = flag;
        }
        self
    }

    pub fn origin(&self) -> Option<&Origin> {
        self.allow_origin.as_ref()
    }

    pub fn exposed_headers(&self) -> impl Iterator<Item = &str> {
        self.expose_headers.iter().map(String::as_str)
    }

    pub fn max_age_seconds(&self) -> Option<u64> {
        self.max_age
    }

    pub fn credentials(&self) -> Option<bool> {
        self.allow_credentials
    }

    pub fn allowed_methods(&self) -> impl Iterator<Item = &Method> {
        self.allow_methods.iter()
    }

    pub fn allowed_headers(&self) -> impl Iterator<Item = &str> {
        self.allow_headers.iter().map(String::as_str)
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
