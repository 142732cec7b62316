use std::collections::HashSet;

/// Configuration for the `Access-Control-Allow-Headers` response header.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AllowedHeaders {
    /// Allow any header; the preflight response echoes
    /// `Access-Control-Request-Headers`.
    Any,
    /// Explicit allow-list, matched case-insensitively.
    List(Vec<String>),
}

impl Default for AllowedHeaders {
    fn default() -> Self {
        AllowedHeaders::Any
    }
}

impl AllowedHeaders {
    /// Builds an allow-list from the provided iterator, trimming whitespace
    /// and dropping case-insensitive duplicates (first instance wins).
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut deduped: Vec<String> = Vec::new();
        for value in values.into_iter() {
            let trimmed = value.into().trim().to_string();
            let key = trimmed.to_ascii_lowercase();
            if seen.insert(key) {
                deduped.push(trimmed);
            }
        }

        Self::List(deduped)
    }

    pub fn any() -> Self {
        Self::Any
    }

    /// Checks a comma-separated `Access-Control-Request-Headers` value. An
    /// empty request list is always allowed.
    pub fn allows(&self, request_headers: &str) -> bool {
        match self {
            Self::Any => true,
            Self::List(allowed) => {
                let request_headers = request_headers.trim();
                if request_headers.is_empty() {
                    return true;
                }

                request_headers
                    .split(',')
                    .map(|value| value.trim())
                    .filter(|value| !value.is_empty())
                    .all(|header| {
                        allowed
                            .iter()
                            .any(|allowed_header| allowed_header.eq_ignore_ascii_case(header))
                    })
            }
        }
    }

    /// The joined list value, or `None` for the wildcard variant (which is
    /// emitted by mirroring the request headers instead).
    pub fn header_value(&self) -> Option<String> {
        match self {
            AllowedHeaders::Any => None,
            AllowedHeaders::List(values) if values.is_empty() => None,
            AllowedHeaders::List(values) => Some(values.join(",")),
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
