use std::sync::Arc;

use corsica::{Cors, CorsConfig, ValidationError};

pub type SharedCors = Arc<Cors>;
pub type SharedAppState = Arc<AppState>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<SharedAppState, ValidationError> {
    let config = CorsConfig {
        allow_origins: vec!["http://api.example.com".into()],
        allow_methods: vec!["GET".into(), "POST".into(), "OPTIONS".into()],
        allow_headers: vec!["Content-Type".into(), "X-Requested-With".into()],
        allow_credentials: true,
        max_age: 600,
        ..CorsConfig::default()
    };

    let cors = Arc::new(Cors::new(config)?);

    Ok(Arc::new(AppState {
        cors,
        greeting: "Welcome to the Hyper CORS demo!",
    }))
}

pub mod middleware;
