use crate::constants::method;
use crate::util::equals_ignore_case;

/// Configuration for the `Access-Control-Allow-Methods` response header.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AllowedMethods {
    /// Allow any method; the preflight response echoes the requested method.
    Any,
    /// Explicit allow-list, matched case-insensitively.
    List(Vec<String>),
}

impl AllowedMethods {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn any() -> Self {
        Self::Any
    }

    pub fn allows(&self, requested: &str) -> bool {
        match self {
            AllowedMethods::Any => true,
            AllowedMethods::List(values) => values
                .iter()
                .any(|value| equals_ignore_case(value, requested)),
        }
    }

    /// The joined list value, or `None` for the wildcard variant (which is
    /// emitted by mirroring the requested method instead).
    pub fn header_value(&self) -> Option<String> {
        match self {
            AllowedMethods::Any => None,
            AllowedMethods::List(values) if values.is_empty() => None,
            AllowedMethods::List(values) => Some(values.join(",")),
        }
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([
            method::GET,
            method::HEAD,
            method::PUT,
            method::PATCH,
            method::POST,
            method::DELETE,
        ])
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
