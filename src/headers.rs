use crate::constants::header;
use indexmap::IndexMap;

/// Response headers in emission order.
pub type Headers = IndexMap<String, String>;

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: IndexMap::with_capacity(estimate),
        }
    }

    pub(crate) fn push(&mut self, name: &str, value: String) {
        self.headers.insert(name.to_string(), value);
    }

    pub(crate) fn add_vary(&mut self, value: &str) {
        let merged = merge_vary(self.headers.get(header::VARY).map(String::as_str), value);
        match merged {
            Some(merged) => {
                self.headers.insert(header::VARY.to_string(), merged);
            }
            None => {
                self.headers.shift_remove(header::VARY);
            }
        }
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

/// Merges `incoming` into an existing `Vary` value, dropping blank entries
/// and case-insensitive duplicates. Returns `None` when nothing remains.
pub(crate) fn merge_vary(existing: Option<&str>, incoming: &str) -> Option<String> {
    let mut deduped: Vec<&str> = Vec::new();
    let entries = existing
        .into_iter()
        .flat_map(|value| value.split(','))
        .chain(incoming.split(','))
        .map(str::trim)
        .filter(|entry| !entry.is_empty());

    for entry in entries {
        if deduped
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(entry))
        {
            continue;
        }
        deduped.push(entry);
    }

    if deduped.is_empty() {
        None
    } else {
        Some(deduped.join(", "))
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
