use crate::pattern::{self, PatternError};
use regex_automata::meta::Regex;

/// Glob-style request-path patterns that gate whether CORS handling applies.
///
/// Patterns and request paths are compared with the leading `/` stripped, so
/// `api/*` covers `/api/users/7`. A `*` matches any character sequence,
/// including `/`. A lone `/` covers only the root path. Requests outside the
/// scope receive no CORS headers at all.
#[derive(Clone, Default)]
pub struct PathScope {
    patterns: Vec<PathPattern>,
}

#[derive(Clone)]
enum PathPattern {
    Literal(String),
    Glob(Regex),
}

impl PathScope {
    /// Compiles the given glob patterns. Literal patterns (no `*`) are kept
    /// as plain strings and compared directly.
    pub fn new<I, S>(patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut scope = Self::default();
        for pattern in patterns {
            scope.push(pattern.as_ref())?;
        }
        Ok(scope)
    }

    /// Compiles and appends a single pattern.
    pub fn push(&mut self, pattern: &str) -> Result<(), PatternError> {
        let trimmed = normalize(pattern);
        if trimmed.contains('*') {
            let regex = pattern::compile(&glob_to_regex(trimmed))?;
            self.patterns.push(PathPattern::Glob(regex));
        } else {
            self.patterns.push(PathPattern::Literal(trimmed.to_owned()));
        }
        Ok(())
    }

    /// A scope covering every request path.
    pub fn any() -> Self {
        Self::new(["*"]).expect("the wildcard glob always compiles")
    }

    pub fn matches(&self, path: &str) -> bool {
        let path = normalize(path);
        self.patterns.iter().any(|pattern| match pattern {
            PathPattern::Literal(value) => value == path,
            PathPattern::Glob(regex) => regex.is_match(path.as_bytes()),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }
}

/// `/` stays as-is so the root path remains addressable; everything else is
/// compared without its leading slash.
fn normalize(value: &str) -> &str {
    if value == "/" {
        value
    } else {
        value.strip_prefix('/').unwrap_or(value)
    }
}

fn glob_to_regex(glob: &str) -> String {
    let mut regex = String::with_capacity(glob.len() + 8);
    regex.push('^');
    for ch in glob.chars() {
        match ch {
            '*' => regex.push_str(".*"),
            '\\' | '.' | '+' | '(' | ')' | '[' | ']' | '{' | '}' | '^' | '$' | '|' | '?' => {
                regex.push('\\');
                regex.push(ch);
            }
            _ => regex.push(ch),
        }
    }
    regex.push('$');
    regex
}

#[cfg(test)]
#[path = "paths_test.rs"]
mod paths_test;
