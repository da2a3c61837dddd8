use indexmap::IndexSet;
use thiserror::Error;
use url::Url;

/// Origins allowed to read cross-origin responses.
///
/// `Any` dominates: once a policy allows any origin, adding explicit origins
/// leaves it unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Origin {
    Any,
    /// Exact, case-sensitive origin strings. Never empty.
    List(IndexSet<String>),
}

/// How the `Access-Control-Allow-Origin` value is derived for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    /// Emit `*`.
    Any,
    /// Emit the configured origin as-is.
    Exact(String),
    /// Echo the request origin and add `Vary: Origin`.
    Mirror,
    /// Emit nothing.
    Disallow,
}

/// Reasons an origin string is refused by the policy builder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OriginError {
    #[error("origin must not be empty")]
    Empty,
    #[error("origin '{origin}' has leading or trailing whitespace")]
    Whitespace { origin: String },
    #[error("origin '{origin}' is not a well-formed URI: {source}")]
    Malformed {
        origin: String,
        #[source]
        source: url::ParseError,
    },
}

/// Syntactic check applied to every configured origin.
///
/// Only well-formedness is checked. The input is returned verbatim so the
/// emitted header matches what the operator configured.
pub fn parse_origin(value: &str) -> Result<&str, OriginError> {
    if value.is_empty() {
        return Err(OriginError::Empty);
    }
    if value.trim() != value {
        return Err(OriginError::Whitespace {
            origin: value.to_owned(),
        });
    }

    Url::parse(value).map_err(|source| OriginError::Malformed {
        origin: value.to_owned(),
        source,
    })?;

    Ok(value)
}

impl Origin {
    /// Builds a list from already validated origins. Returns `None` when the
    /// iterator is empty.
    pub(crate) fn list<I, S>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: IndexSet<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            None
        } else {
            Some(Self::List(values))
        }
    }

    pub(crate) fn with(self, origin: &str) -> Self {
        match self {
            Origin::Any => Origin::Any,
            Origin::List(mut values) => {
                values.insert(origin.to_owned());
                Origin::List(values)
            }
        }
    }

    /// Resolves the header decision for the given request origin. An absent
    /// `Origin` header is passed as the empty string.
    pub fn resolve(&self, request_origin: &str) -> OriginDecision {
        match self {
            Origin::Any => OriginDecision::Any,
            Origin::List(values) if values.len() == 1 => values
                .first()
                .map(|value| OriginDecision::Exact(value.clone()))
                .unwrap_or(OriginDecision::Disallow),
            Origin::List(values) => {
                if values.contains(request_origin) {
                    OriginDecision::Mirror
                } else {
                    OriginDecision::Disallow
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
