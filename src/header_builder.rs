use crate::constants::header;
use crate::headers::HeaderCollection;
use crate::origin::OriginDecision;
use crate::policy::CorsPolicy;

/// Builds the CORS response headers for a single request.
pub(crate) struct HeaderBuilder<'a> {
    policy: &'a CorsPolicy,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(policy: &'a CorsPolicy) -> Self {
        Self { policy }
    }

    /// Runs every step in emission order. `request_origin` is empty when the
    /// request carried no `Origin` header.
    pub(crate) fn build(&self, request_origin: &str) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(7);
        self.build_origin_headers(&mut headers, request_origin);
        self.build_exposed_headers(&mut headers);
        self.build_max_age_header(&mut headers);
        self.build_credentials_header(&mut headers);
        self.build_methods_header(&mut headers);
        self.build_allowed_headers(&mut headers);
        headers
    }

    pub(crate) fn build_origin_headers(&self, headers: &mut HeaderCollection, request_origin: &str) {
        let Some(origin) = self.policy.origin() else {
            return;
        };

        match origin.resolve(request_origin) {
            OriginDecision::Any => {
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*".to_string());
            }
            OriginDecision::Exact(value) => {
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
            }
            OriginDecision::Mirror => {
                headers.push(
                    header::ACCESS_CONTROL_ALLOW_ORIGIN,
                    request_origin.to_string(),
                );
                headers.add_vary(header::ORIGIN);
            }
            OriginDecision::Disallow => {
                tracing::debug!(
                    origin = request_origin,
                    "request origin not in CORS allow-list"
                );
            }
        }
    }

    pub(crate) fn build_exposed_headers(&self, headers: &mut HeaderCollection) {
        if let Some(value) = join(self.policy.exposed_headers()) {
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
        }
    }

    pub(crate) fn build_max_age_header(&self, headers: &mut HeaderCollection) {
        if let Some(seconds) = self.policy.max_age_seconds() {
            headers.push(header::ACCESS_CONTROL_MAX_AGE, seconds.to_string());
        }
    }

    /// Presence of the flag is what counts, a stored `false` still emits `true`.
    pub(crate) fn build_credentials_header(&self, headers: &mut HeaderCollection) {
        if self.policy.credentials().is_some() {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true".to_string());
        }
    }

    pub(crate) fn build_methods_header(&self, headers: &mut HeaderCollection) {
        let methods = self.policy.allowed_methods().map(|method| method.as_str());
        if let Some(value) = join(methods) {
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
        }
    }

    pub(crate) fn build_allowed_headers(&self, headers: &mut HeaderCollection) {
        if let Some(value) = join(self.policy.allowed_headers()) {
            headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
        }
    }
}

fn join<'s>(values: impl Iterator<Item = &'s str>) -> Option<String> {
    let values = values.collect::<Vec<_>>();
    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
