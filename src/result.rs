use crate::headers::Headers;

/// Headers to apply to the response before delegating to the next handler.
#[derive(Debug, Clone)]
pub struct SimpleResult {
    pub headers: Headers,
}

/// Headers and status answering a preflight request; the chain is halted
/// and the downstream handler is never invoked.
#[derive(Debug, Clone)]
pub struct PreflightResult {
    pub headers: Headers,
    pub status: u16,
}

/// Outcome of evaluating one request against the policy.
///
/// `NotApplicable` covers both same-origin requests (no `Origin` header)
/// and disallowed origins: in either case the response is left untouched
/// and the browser enforces its same-origin restriction client-side.
#[derive(Debug, Clone)]
pub enum CorsDecision {
    Simple(SimpleResult),
    Preflight(PreflightResult),
    NotApplicable,
}
