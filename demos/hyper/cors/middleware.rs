use std::future::Future;
use std::pin::Pin;

use corsica::constants::header;
use corsica::{CorsDecision, Headers, PreflightResult, RequestContext};
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::http::header::{HeaderMap, HeaderName, HeaderValue};
use hyper::service::Service;
use hyper::{Request, Response};

use super::SharedCors;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

pub type CorsBody = Full<Bytes>;

/// Hyper middleware following the pattern from the official
/// "Getting Started with a Server Middleware" guide:
/// https://hyper.rs/guides/1/server/middleware/
#[derive(Clone)]
pub struct CorsicaService<S> {
    inner: S,
    cors: SharedCors,
}

impl<S> CorsicaService<S> {
    pub fn new(cors: SharedCors, inner: S) -> Self {
        Self { inner, cors }
    }
}

impl<S> Service<Request<Incoming>> for CorsicaService<S>
where
    S: Service<Request<Incoming>, Response = Response<CorsBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
{
    type Response = Response<CorsBody>;
    type Error = S::Error;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let owned_ctx = OwnedRequestContext::from_request(&req);
        let decision = self.cors.check(&owned_ctx.as_request_context());

        match decision {
            CorsDecision::Preflight(result) => {
                Box::pin(async move { Ok(preflight_response(result)) })
            }
            CorsDecision::Simple(result) => {
                let inner = self.inner.clone();
                Box::pin(async move {
                    let mut response = inner.call(req).await?;
                    apply_headers(response.headers_mut(), &result.headers);
                    Ok(response)
                })
            }
            CorsDecision::NotApplicable => {
                let inner = self.inner.clone();
                Box::pin(async move { inner.call(req).await })
            }
        }
    }
}

fn preflight_response(result: PreflightResult) -> Response<CorsBody> {
    let mut builder = Response::builder().status(result.status);
    if let Some(map) = builder.headers_mut() {
        apply_headers(map, &result.headers);
    }

    builder
        .body(Full::new(Bytes::new()))
        .expect("valid preflight response")
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
    fn from_request(request: &Request<Incoming>) -> Self {
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
