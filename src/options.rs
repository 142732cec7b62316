use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::exposed_headers::ExposedHeaders;
use crate::origin::Origin;
use crate::paths::PathScope;
use thiserror::Error;

/// Immutable policy values consumed by [`crate::CorsPolicy`]. Construct once
/// at startup; the evaluator never mutates them.
#[derive(Clone)]
pub struct CorsOptions {
    pub paths: PathScope,
    pub origin: Origin,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    pub credentials: bool,
    /// Preflight cache duration in seconds; `0` emits no
    /// `Access-Control-Max-Age` header.
    pub max_age: u64,
    /// When false, the caller should end an allowed preflight response
    /// instead of continuing into routing.
    pub preflight_continue: bool,
    pub options_success_status: u16,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            paths: PathScope::any(),
            origin: Origin::Any,
            methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
            exposed_headers: ExposedHeaders::default(),
            credentials: false,
            max_age: 0,
            preflight_continue: false,
            options_success_status: 204,
        }
    }
}

/// Malformed policy combinations, rejected at construction so the process
/// fails fast instead of serving a policy browsers will not honor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "credentials require an explicit origin allow-list; the wildcard origin is forbidden by the CORS specification"
    )]
    CredentialsRequireSpecificOrigin,
    #[error("allowed header lists cannot contain \"*\"; use AllowedHeaders::Any instead")]
    AllowedHeadersListCannotContainWildcard,
    #[error("exposed header lists cannot contain \"*\"; use ExposedHeaders::Any instead")]
    ExposeHeadersListCannotContainWildcard,
    #[error("exposing all headers is forbidden when credentials are enabled")]
    CredentialsRequireSpecificExposeHeaders,
    #[error("preflight success status {0} is outside the 2xx range")]
    InvalidSuccessStatus(u16),
}

impl CorsOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.credentials && matches!(self.origin, Origin::Any) {
            return Err(ValidationError::CredentialsRequireSpecificOrigin);
        }

        if let AllowedHeaders::List(values) = &self.allowed_headers
            && values.iter().any(|value| value == "*")
        {
            return Err(ValidationError::AllowedHeadersListCannotContainWildcard);
        }

        if let ExposedHeaders::List(values) = &self.exposed_headers
            && values.iter().any(|value| value == "*")
        {
            return Err(ValidationError::ExposeHeadersListCannotContainWildcard);
        }

        if self.credentials && matches!(self.exposed_headers, ExposedHeaders::Any) {
            return Err(ValidationError::CredentialsRequireSpecificExposeHeaders);
        }

        if !(200..=299).contains(&self.options_success_status) {
            return Err(ValidationError::InvalidSuccessStatus(
                self.options_success_status,
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
