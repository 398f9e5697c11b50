use std::env;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::{apply_security_headers, hsts_enabled_from_env};

const DEFAULT_PORT: u16 = 3001;

pub struct Config {
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Self { port }
    }
}
