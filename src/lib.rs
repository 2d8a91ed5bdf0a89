pub mod constants;

mod config;
mod context;
mod cors;
mod headers;
mod result;

pub use config::{CorsConfig, ValidationError};
pub use context::RequestContext;
pub use cors::Cors;
pub use headers::Headers;
pub use result::{CorsDecision, PreflightResult, SimpleResult};
