use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use corsica::{CorsDecision, Headers, RequestContext, constants::header};

use super::AppState;

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let owned_ctx = OwnedRequestContext::from_request(&request);
    let decision = state.cors.check(&owned_ctx.as_request_context());

    match decision {
        CorsDecision::Preflight(result) => preflight_response(result.status, &result.headers),
        CorsDecision::Simple(result) => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), &result.headers);
            response
        }
        CorsDecision::NotApplicable => next.run(request).await,
    }
}

fn preflight_response(status: u16, headers: &Headers) -> Response {
    let mut response = Response::builder()
        .status(status)
        .body(Body::empty())
        .expect("valid preflight response");

    apply_headers(response.headers_mut(), headers);
    response
}

// Vary is appended so upstream cache directives survive; everything else
// overwrites.
fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        if let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            if name.eq_ignore_ascii_case(header::VARY) {
                map.append(header_name, header_value);
            } else {
                map.insert(header_name, header_value);
            }
        }
    }
}

struct OwnedRequestContext {
    method: String,
    origin: Option<String>,
    access_control_request_method: Option<String>,
}

impl OwnedRequestContext {
    fn from_request(request: &Request) -> Self {
        let headers = request.headers();

        Self {
            method: request.method().as_str().to_string(),
            origin: header_value(headers, header::ORIGIN),
            access_control_request_method: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_METHOD,
            ),
        }
    }

    fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: self.access_control_request_method.as_deref(),
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}
