use crate::headers::Headers;

/// Headers and response metadata for an allowed preflight request.
#[derive(Debug, Clone)]
pub struct PreflightResult {
    pub headers: Headers,
    /// Status the caller should respond with when `end_response` is set.
    pub status: u16,
    /// When true the caller should answer the preflight directly instead of
    /// continuing into routing.
    pub end_response: bool,
}

/// Headers for an allowed simple (non-preflight) request.
#[derive(Debug, Clone)]
pub struct SimpleResult {
    pub headers: Headers,
}

/// Headers for a request whose origin, method, or headers were rejected.
///
/// Denial is a decision, not an error: the caller proceeds without CORS
/// permission headers and the browser enforces the block. The carried
/// headers are cache-correctness headers only (`Vary: Origin`).
#[derive(Debug, Clone)]
pub struct DeniedResult {
    pub headers: Headers,
}

/// Overall decision returned by the policy evaluator.
#[derive(Debug, Clone)]
pub enum CorsDecision {
    Preflight(PreflightResult),
    Simple(SimpleResult),
    Denied(DeniedResult),
    /// The request is outside the configured path scope or carries no
    /// `Origin` header; it proceeds untouched.
    NotApplicable,
}
