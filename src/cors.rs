use crate::config::{ConfigError, CorsConfig};
use crate::constants::header;
use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderCollection;
use crate::normalized_request::NormalizedRequest;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::OriginDecision;
use crate::result::{CorsDecision, DeniedResult, PreflightResult, SimpleResult};

/// Core CORS policy evaluator. Holds the validated [`CorsOptions`] snapshot
/// and computes a [`CorsDecision`] per request; it performs no I/O and keeps
/// no per-request state, so a single instance can be shared across request
/// tasks.
pub struct CorsPolicy {
    options: CorsOptions,
}

impl CorsPolicy {
    /// Validates the options eagerly; a malformed policy refuses to
    /// construct rather than serving headers browsers will reject.
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Builds a policy straight from a deserialized configuration record.
    pub fn from_config(config: CorsConfig) -> Result<Self, ConfigError> {
        let options = config.into_options()?;
        Self::new(options).map_err(ConfigError::from)
    }

    pub fn evaluate(&self, request: &RequestContext<'_>) -> CorsDecision {
        if !self.options.paths.matches(request.path) {
            return CorsDecision::NotApplicable;
        }

        let normalized_request = NormalizedRequest::new(request);
        let normalized = normalized_request.as_context();

        if normalized.origin.is_none() {
            return CorsDecision::NotApplicable;
        }

        if normalized_request.is_preflight() {
            self.process_preflight(request, &normalized)
        } else {
            self.process_simple(request, &normalized)
        }
    }

    fn process_preflight(
        &self,
        original: &RequestContext<'_>,
        normalized: &RequestContext<'_>,
    ) -> CorsDecision {
        let builder = HeaderBuilder::new(&self.options);
        let (origin_headers, decision) = builder.build_origin_headers(original, normalized);

        match decision {
            OriginDecision::Skip => return CorsDecision::NotApplicable,
            OriginDecision::Disallow => return Self::denied(origin_headers),
            OriginDecision::Any | OriginDecision::Mirror => {}
        }

        let requested_method = normalized.access_control_request_method.unwrap_or("");
        if !self.options.methods.allows(requested_method) {
            return Self::denied(self.vary_only_headers());
        }

        let requested_headers = normalized.access_control_request_headers.unwrap_or("");
        if !self.options.allowed_headers.allows(requested_headers) {
            return Self::denied(self.vary_only_headers());
        }

        let mut headers = origin_headers;
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_methods_header(original));
        headers.extend(builder.build_allowed_headers(original));
        headers.extend(builder.build_max_age_header());

        CorsDecision::Preflight(PreflightResult {
            headers: headers.into_headers(),
            status: self.options.options_success_status,
            end_response: !self.options.preflight_continue,
        })
    }

    fn process_simple(
        &self,
        original: &RequestContext<'_>,
        normalized: &RequestContext<'_>,
    ) -> CorsDecision {
        let builder = HeaderBuilder::new(&self.options);
        let (origin_headers, decision) = builder.build_origin_headers(original, normalized);

        match decision {
            OriginDecision::Skip => return CorsDecision::NotApplicable,
            OriginDecision::Disallow => return Self::denied(origin_headers),
            OriginDecision::Any | OriginDecision::Mirror => {}
        }

        let mut headers = origin_headers;
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_exposed_headers());

        CorsDecision::Simple(SimpleResult {
            headers: headers.into_headers(),
        })
    }

    fn denied(headers: HeaderCollection) -> CorsDecision {
        CorsDecision::Denied(DeniedResult {
            headers: headers.into_headers(),
        })
    }

    /// Denials carry cache-correctness headers only, never permission
    /// headers.
    fn vary_only_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if self.options.origin.vary_on_disallow() {
            headers.add_vary(header::ORIGIN);
        }
        headers
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
