/// Borrowed per-request metadata the evaluator needs to reach a decision.
///
/// `origin` and the two `Access-Control-Request-*` fields are `None` when the
/// corresponding request header is absent; an empty value is treated the same
/// as absent during normalization.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}
