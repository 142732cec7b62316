use crate::pattern::{self, PatternError};
use crate::util::equals_ignore_case;
use regex_automata::meta::Regex;

// Longer values are rejected outright rather than handed to the matchers.
const MAX_ORIGIN_LENGTH: usize = 4_096;

/// Origin policy: allow every origin, or an ordered allow-list of exact
/// values and regex patterns. Exact entries should precede pattern entries;
/// the first matching entry wins.
#[derive(Clone, Default)]
pub enum Origin {
    #[default]
    Any,
    List(Vec<OriginMatcher>),
}

/// How the configured policy resolved against a request's `Origin` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    /// Wildcard policy; emit `*`.
    Any,
    /// Allow-listed; echo the request origin back.
    Mirror,
    /// Origin present but not allowed.
    Disallow,
    /// No origin to evaluate.
    Skip,
}

#[derive(Clone)]
pub enum OriginMatcher {
    Exact(String),
    Pattern(Regex),
}

impl OriginMatcher {
    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn pattern(regex: Regex) -> Self {
        Self::Pattern(regex)
    }

    /// Compiles a case-insensitive origin pattern, bounded by the shared
    /// pattern length cap and compile budget.
    pub fn pattern_str(pattern: &str) -> Result<Self, PatternError> {
        pattern::compile_ignore_case(pattern).map(Self::Pattern)
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            OriginMatcher::Exact(value) => equals_ignore_case(value, candidate),
            OriginMatcher::Pattern(regex) => regex.is_match(candidate.as_bytes()),
        }
    }
}

impl From<String> for OriginMatcher {
    fn from(value: String) -> Self {
        OriginMatcher::Exact(value)
    }
}

impl From<&str> for OriginMatcher {
    fn from(value: &str) -> Self {
        OriginMatcher::Exact(value.to_owned())
    }
}

impl Origin {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::List(vec![OriginMatcher::exact(value)])
    }

    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OriginMatcher>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn resolve(&self, request_origin: Option<&str>) -> OriginDecision {
        let Some(origin) = request_origin else {
            return OriginDecision::Skip;
        };

        if origin.len() > MAX_ORIGIN_LENGTH {
            return OriginDecision::Disallow;
        }

        match self {
            Origin::Any => OriginDecision::Any,
            Origin::List(matchers) => {
                if matchers.iter().any(|matcher| matcher.matches(origin)) {
                    OriginDecision::Mirror
                } else {
                    OriginDecision::Disallow
                }
            }
        }
    }

    /// `Vary: Origin` is required whenever the response depends on the
    /// request origin, including disallowed outcomes.
    pub fn vary_on_disallow(&self) -> bool {
        !matches!(self, Origin::Any)
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
