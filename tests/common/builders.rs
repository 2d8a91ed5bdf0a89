use corsica::constants::method;
use corsica::{Cors, CorsConfig, CorsDecision, RequestContext, ValidationError};

#[derive(Default)]
pub struct PolicyBuilder {
    config: CorsConfig,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.allow_origins = origins.into_iter().map(Into::into).collect();
        self
    }

    pub fn all_origins(mut self) -> Self {
        self.config.allow_all_origins = true;
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.allow_methods = methods.into_iter().map(Into::into).collect();
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.allow_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.config.allow_credentials = enabled;
        self
    }

    pub fn max_age(mut self, seconds: u32) -> Self {
        self.config.max_age = seconds;
        self
    }

    pub fn build(self) -> Cors {
        Cors::new(self.config).expect("valid CORS configuration")
    }

    pub fn try_build(self) -> Result<Cors, ValidationError> {
        Cors::new(self.config)
    }
}

pub struct SimpleRequestBuilder {
    method: String,
    origin: Option<String>,
}

impl SimpleRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let SimpleRequestBuilder { method, origin } = self;
        let ctx = RequestContext {
            method: &method,
            origin: origin.as_deref(),
            access_control_request_method: None,
        };
        cors.check(&ctx)
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    origin: Option<String>,
    request_method: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let PreflightRequestBuilder {
            origin,
            request_method,
        } = self;
        let ctx = RequestContext {
            method: method::OPTIONS,
            origin: origin.as_deref(),
            access_control_request_method: request_method.as_deref(),
        };
        cors.check(&ctx)
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
