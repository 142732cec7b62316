pub mod constants;

mod allowed_headers;
mod allowed_methods;
mod config;
mod context;
mod cors;
mod exposed_headers;
mod header_builder;
mod headers;
mod normalized_request;
mod options;
mod origin;
mod paths;
mod pattern;
mod result;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use config::{ConfigError, CorsConfig};
pub use context::RequestContext;
pub use cors::CorsPolicy;
pub use exposed_headers::ExposedHeaders;
pub use headers::Headers;
pub use options::{CorsOptions, ValidationError};
pub use origin::{Origin, OriginDecision, OriginMatcher};
pub use paths::PathScope;
pub use pattern::PatternError;
pub use result::{CorsDecision, DeniedResult, PreflightResult, SimpleResult};
