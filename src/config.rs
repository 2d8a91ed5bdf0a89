use crate::constants::method;
use thiserror::Error;

pub(crate) const DEFAULT_MAX_AGE: u32 = 86_400;

/// Static policy description consumed by [`Cors::new`](crate::Cors::new).
///
/// The default value allows nothing: no origin matches an empty allow list.
/// Fields left at their zero value are normalized during construction:
/// an empty `allow_methods` becomes `GET, POST, HEAD` and a zero `max_age`
/// becomes 86400 seconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsConfig {
    /// Origins permitted by exact, case-sensitive comparison.
    pub allow_origins: Vec<String>,
    /// Permit every origin and answer with `Access-Control-Allow-Origin: *`.
    pub allow_all_origins: bool,
    /// Methods advertised in `Access-Control-Allow-Methods`.
    pub allow_methods: Vec<String>,
    /// Header names advertised in `Access-Control-Allow-Headers`.
    pub allow_headers: Vec<String>,
    /// Emit `Access-Control-Allow-Credentials: true`.
    pub allow_credentials: bool,
    /// Seconds a preflight result may be cached, emitted in
    /// `Access-Control-Max-Age`.
    pub max_age: u32,
}

impl CorsConfig {
    /// Permissive preset: every origin, the common mutating methods, the
    /// `Content-Type` and `Authorization` headers, credentials disabled.
    pub fn permissive() -> Self {
        Self {
            allow_all_origins: true,
            allow_methods: vec![
                method::GET.into(),
                method::POST.into(),
                method::PUT.into(),
                method::DELETE.into(),
                method::PATCH.into(),
                method::OPTIONS.into(),
            ],
            allow_headers: vec!["Content-Type".into(), "Authorization".into()],
            max_age: DEFAULT_MAX_AGE,
            ..Self::default()
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.allow_all_origins && self.allow_credentials {
            return Err(ValidationError::AnyOriginWithCredentials);
        }

        Ok(())
    }

    pub(crate) fn normalize(mut self) -> Self {
        if self.allow_methods.is_empty() {
            self.allow_methods = vec![
                method::GET.into(),
                method::POST.into(),
                method::HEAD.into(),
            ];
        }
        if self.max_age == 0 {
            self.max_age = DEFAULT_MAX_AGE;
        }

        self
    }
}

/// Rejected configurations. Construction is the only fallible operation;
/// request evaluation is total.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "allowing every origin while allowing credentials is forbidden by the CORS specification; list the permitted origins explicitly instead"
    )]
    AnyOriginWithCredentials,
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
