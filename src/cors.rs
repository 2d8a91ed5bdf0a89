use indexmap::IndexSet;

use crate::config::{CorsConfig, ValidationError};
use crate::constants::{header, method};
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::result::{CorsDecision, PreflightResult, SimpleResult};

const PREFLIGHT_SUCCESS_STATUS: u16 = 204;

/// Core CORS policy engine that evaluates requests against a validated
/// [`CorsConfig`].
///
/// Construction validates and normalizes the configuration once and
/// precomputes the derived header values; after that the engine is
/// immutable and safe to share across threads without synchronization.
pub struct Cors {
    allow_origins: IndexSet<String>,
    allow_all_origins: bool,
    allow_credentials: bool,
    methods: String,
    headers: String,
    max_age: String,
}

impl Cors {
    pub fn new(config: CorsConfig) -> Result<Self, ValidationError> {
        config.validate()?;

        Ok(Self::from_validated(config.normalize()))
    }

    /// Engine built from [`CorsConfig::permissive`]. Infallible: the
    /// preset keeps credentials disabled, so it cannot violate the
    /// wildcard-with-credentials invariant.
    pub fn permissive() -> Self {
        Self::from_validated(CorsConfig::permissive().normalize())
    }

    fn from_validated(config: CorsConfig) -> Self {
        Self {
            allow_origins: config.allow_origins.into_iter().collect(),
            allow_all_origins: config.allow_all_origins,
            allow_credentials: config.allow_credentials,
            methods: config.allow_methods.join(", "),
            headers: config.allow_headers.join(", "),
            max_age: config.max_age.to_string(),
        }
    }

    /// Evaluate one request. Same-origin requests and disallowed origins
    /// yield [`CorsDecision::NotApplicable`]; allowed origins yield the
    /// response headers plus, for preflights, the terminating status.
    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        let Some(origin) = request.origin.filter(|origin| !origin.is_empty()) else {
            return CorsDecision::NotApplicable;
        };

        if !self.allows_origin(origin) {
            return CorsDecision::NotApplicable;
        }

        let mut headers = HeaderCollection::new();
        if self.allow_all_origins {
            headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
        } else {
            headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
            headers.add_vary(header::ORIGIN);
        }

        if self.allow_credentials {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
        if !self.methods.is_empty() {
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, self.methods.as_str());
        }
        if !self.headers.is_empty() {
            headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, self.headers.as_str());
        }
        headers.push(header::ACCESS_CONTROL_MAX_AGE, self.max_age.as_str());

        if Self::is_preflight(request) {
            CorsDecision::Preflight(PreflightResult {
                headers: headers.into_headers(),
                status: PREFLIGHT_SUCCESS_STATUS,
            })
        } else {
            CorsDecision::Simple(SimpleResult {
                headers: headers.into_headers(),
            })
        }
    }

    // Membership is exact byte equality: no case folding, no scheme or
    // port normalization.
    fn allows_origin(&self, origin: &str) -> bool {
        self.allow_all_origins || self.allow_origins.contains(origin)
    }

    // An OPTIONS request only counts as a preflight when it names the
    // method it is asking about.
    fn is_preflight(request: &RequestContext<'_>) -> bool {
        request.method.eq_ignore_ascii_case(method::OPTIONS)
            && request
                .access_control_request_method
                .is_some_and(|requested| !requested.trim().is_empty())
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
