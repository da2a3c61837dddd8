use bunner_cors_policy::constants::method;
use bunner_cors_policy::{Cors, CorsDecision, CorsPolicy, RequestContext};

pub struct RequestBuilder {
    method: String,
    origin: Option<String>,
    extra: Vec<(String, String)>,
}

impl RequestBuilder {
    fn new(method: &str) -> Self {
        Self {
            method: method.to_string(),
            origin: None,
            extra: Vec::new(),
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((name.into(), value.into()));
        self
    }

    fn pairs(&self) -> Vec<(&str, &str)> {
        self.origin
            .iter()
            .map(|origin| ("Origin", origin.as_str()))
            .chain(
                self.extra
                    .iter()
                    .map(|(name, value)| (name.as_str(), value.as_str())),
            )
            .collect()
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let pairs = self.pairs();
        cors.check(&RequestContext::new(&self.method, &pairs))
    }

    /// Runs the request through [`Cors::handle`] with a handler that answers
    /// `200 handled` and marks `Content-Type`.
    pub fn handle(self, cors: &Cors) -> (http::Response<String>, bool) {
        let pairs = self.pairs();
        let mut called = false;
        let response = cors.handle(RequestContext::new(&self.method, &pairs), |_| {
            called = true;
            http::Response::builder()
                .header("Content-Type", "text/plain")
                .body("handled".to_string())
                .expect("valid handler response")
        });
        (response, called)
    }
}

pub fn cors(policy: CorsPolicy) -> Cors {
    Cors::new(policy)
}

pub fn actual_request() -> RequestBuilder {
    RequestBuilder::new(method::GET)
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS)
}
