use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;
use crate::origin::OriginDecision;

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    /// Resolves the origin policy and produces the `Access-Control-Allow-Origin`
    /// and `Vary` headers for the decision. Mirrored values are taken from the
    /// original request so the echoed origin keeps its casing.
    pub(crate) fn build_origin_headers(
        &self,
        original: &RequestContext<'_>,
        normalized: &RequestContext<'_>,
    ) -> (HeaderCollection, OriginDecision) {
        match self.options.origin.resolve(normalized.origin) {
            OriginDecision::Any => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
                (headers, OriginDecision::Any)
            }
            OriginDecision::Mirror => {
                let mut headers = HeaderCollection::with_estimate(2);
                headers.add_vary(header::ORIGIN);
                match original.origin.map(str::trim) {
                    Some(origin) if !origin.is_empty() => {
                        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
                        (headers, OriginDecision::Mirror)
                    }
                    _ => (headers, OriginDecision::Disallow),
                }
            }
            OriginDecision::Disallow => {
                let mut headers = HeaderCollection::with_estimate(1);
                if self.options.origin.vary_on_disallow() {
                    headers.add_vary(header::ORIGIN);
                }
                (headers, OriginDecision::Disallow)
            }
            OriginDecision::Skip => (HeaderCollection::new(), OriginDecision::Skip),
        }
    }

    /// `Access-Control-Allow-Methods`: the configured list, or the requested
    /// method echoed back uppercased for the wildcard variant.
    pub(crate) fn build_methods_header(
        &self,
        original: &RequestContext<'_>,
    ) -> HeaderCollection {
        match &self.options.methods {
            AllowedMethods::Any => {
                let mut headers = HeaderCollection::with_estimate(2);
                headers.add_vary(header::ACCESS_CONTROL_REQUEST_METHOD);
                if let Some(requested) = original.access_control_request_method
                    && !requested.trim().is_empty()
                {
                    headers.push(
                        header::ACCESS_CONTROL_ALLOW_METHODS,
                        requested.trim().to_ascii_uppercase(),
                    );
                }
                headers
            }
            methods => {
                if let Some(value) = methods.header_value() {
                    let mut headers = HeaderCollection::with_estimate(1);
                    headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
                    headers
                } else {
                    HeaderCollection::new()
                }
            }
        }
    }

    /// `Access-Control-Allow-Headers`: the configured list, or the request's
    /// header list echoed back for the wildcard variant.
    pub(crate) fn build_allowed_headers(
        &self,
        original: &RequestContext<'_>,
    ) -> HeaderCollection {
        match &self.options.allowed_headers {
            AllowedHeaders::Any => {
                let mut headers = HeaderCollection::with_estimate(2);
                headers.add_vary(header::ACCESS_CONTROL_REQUEST_HEADERS);
                if let Some(requested) = original.access_control_request_headers
                    && !requested.trim().is_empty()
                {
                    headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, requested.trim());
                }
                headers
            }
            allowed => {
                if let Some(value) = allowed.header_value() {
                    let mut headers = HeaderCollection::with_estimate(1);
                    headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
                    headers
                } else {
                    HeaderCollection::new()
                }
            }
        }
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        if self.options.credentials {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        if let Some(value) = self.options.exposed_headers.header_value() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        if self.options.max_age > 0 {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(
                header::ACCESS_CONTROL_MAX_AGE,
                self.options.max_age.to_string(),
            );
            headers
        } else {
            HeaderCollection::new()
        }
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
