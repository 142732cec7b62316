use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::exposed_headers::ExposedHeaders;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::{Origin, OriginMatcher};
use crate::paths::PathScope;
use crate::pattern::PatternError;
use crate::util::is_http_token;
use serde::Deserialize;
use thiserror::Error;

/// External configuration record, loaded once at process start by whatever
/// mechanism the host application uses (file, environment, service). The key
/// names form the wire contract and are deliberately not renamed.
///
/// A `*` entry in `allowed_methods`, `allowed_origins`, or `allowed_headers`
/// selects the wildcard behavior for that concern.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorsConfig {
    pub paths: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_origins: Vec<String>,
    pub allowed_origins_patterns: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub exposed_headers: Vec<String>,
    pub max_age: u64,
    pub supports_credentials: bool,
}

/// Errors turning a configuration record into usable policy options. All of
/// these are startup-fatal; there is no degraded mode.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid path pattern `{pattern}`")]
    InvalidPathPattern {
        pattern: String,
        #[source]
        source: PatternError,
    },
    #[error("invalid origin pattern `{pattern}`")]
    InvalidOriginPattern {
        pattern: String,
        #[source]
        source: PatternError,
    },
    #[error("`{0}` is not a valid HTTP method token")]
    InvalidMethod(String),
    #[error("`{0}` is not a valid header name")]
    InvalidHeaderName(String),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl CorsConfig {
    /// Compiles patterns and resolves wildcard entries into typed policy
    /// options. The result still goes through [`CorsOptions::validate`] when
    /// handed to [`crate::CorsPolicy::new`].
    pub fn into_options(self) -> Result<CorsOptions, ConfigError> {
        let mut paths = PathScope::default();
        for pattern in &self.paths {
            paths
                .push(pattern)
                .map_err(|source| ConfigError::InvalidPathPattern {
                    pattern: pattern.clone(),
                    source,
                })?;
        }

        let methods = if self.allowed_methods.iter().any(|value| value == "*") {
            AllowedMethods::Any
        } else {
            for method in &self.allowed_methods {
                if !is_http_token(method) {
                    return Err(ConfigError::InvalidMethod(method.clone()));
                }
            }
            AllowedMethods::list(self.allowed_methods)
        };

        let origin = if self.allowed_origins.iter().any(|value| value == "*") {
            Origin::Any
        } else {
            let mut matchers: Vec<OriginMatcher> = self
                .allowed_origins
                .into_iter()
                .map(OriginMatcher::Exact)
                .collect();
            for pattern in self.allowed_origins_patterns {
                let matcher = OriginMatcher::pattern_str(&pattern).map_err(|source| {
                    ConfigError::InvalidOriginPattern { pattern, source }
                })?;
                matchers.push(matcher);
            }
            Origin::List(matchers)
        };

        let allowed_headers = if self.allowed_headers.iter().any(|value| value == "*") {
            AllowedHeaders::Any
        } else {
            for header in &self.allowed_headers {
                if !is_http_token(header) {
                    return Err(ConfigError::InvalidHeaderName(header.clone()));
                }
            }
            AllowedHeaders::list(self.allowed_headers)
        };

        for header in &self.exposed_headers {
            if header != "*" && !is_http_token(header) {
                return Err(ConfigError::InvalidHeaderName(header.clone()));
            }
        }
        let exposed_headers = ExposedHeaders::list(self.exposed_headers);

        Ok(CorsOptions {
            paths,
            origin,
            methods,
            allowed_headers,
            exposed_headers,
            credentials: self.supports_credentials,
            max_age: self.max_age,
            ..CorsOptions::default()
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
