use crate::context::RequestContext;
use std::borrow::Cow;

/// Case-normalized view of a request. Comparisons run against the lowered
/// components; mirrored header values are taken from the original request so
/// caller casing is preserved. The path is left untouched because path
/// patterns are case-sensitive.
pub(crate) struct NormalizedRequest<'a> {
    path: &'a str,
    method: Cow<'a, str>,
    origin: Option<Cow<'a, str>>,
    access_control_request_method: Option<Cow<'a, str>>,
    access_control_request_headers: Option<Cow<'a, str>>,
}

impl<'a> NormalizedRequest<'a> {
    pub(crate) fn new(request: &'a RequestContext<'a>) -> Self {
        Self {
            path: request.path,
            method: normalize_component(request.method),
            origin: request.origin.and_then(normalize_optional),
            access_control_request_method: request
                .access_control_request_method
                .and_then(normalize_optional),
            access_control_request_headers: request
                .access_control_request_headers
                .and_then(normalize_optional),
        }
    }

    pub(crate) fn as_context(&self) -> RequestContext<'_> {
        RequestContext {
            path: self.path,
            method: self.method.as_ref(),
            origin: self.origin.as_deref(),
            access_control_request_method: self.access_control_request_method.as_deref(),
            access_control_request_headers: self.access_control_request_headers.as_deref(),
        }
    }

    /// A preflight is an `OPTIONS` request carrying
    /// `Access-Control-Request-Method`; a bare `OPTIONS` is evaluated as a
    /// simple request.
    pub(crate) fn is_preflight(&self) -> bool {
        self.method.as_ref() == "options" && self.access_control_request_method.is_some()
    }
}

fn normalize_component(value: &str) -> Cow<'_, str> {
    if value.is_ascii() {
        if value.bytes().any(|byte| byte.is_ascii_uppercase()) {
            Cow::Owned(value.to_ascii_lowercase())
        } else {
            Cow::Borrowed(value)
        }
    } else if value.chars().any(|ch| ch.is_uppercase()) {
        Cow::Owned(value.to_lowercase())
    } else {
        Cow::Borrowed(value)
    }
}

fn normalize_optional(value: &str) -> Option<Cow<'_, str>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(normalize_component(trimmed))
    }
}

#[cfg(test)]
#[path = "normalized_request_test.rs"]
mod normalized_request_test;
