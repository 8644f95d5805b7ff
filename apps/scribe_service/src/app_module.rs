use std::sync::Arc;

use scribe_llm::{CompletionProvider, GeminiService, SubstitutionStrategy};

use crate::{
    config::AppConfig,
    scripting::scripting_service::ScriptingService,
    shared::{origin_middleware::AllowedOrigins, rate_limit_middleware::RateLimiter},
};

#[derive(Clone)]
pub struct AppService {
    pub scripting_service: ScriptingService,
}

impl AppService {
    pub fn new(provider: Arc<dyn CompletionProvider>, strategy: SubstitutionStrategy) -> Self {
        let scripting_service = ScriptingService::new(provider, strategy);

        Self { scripting_service }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub service: AppService,
}

impl AppState {
    pub fn new(provider: Arc<dyn CompletionProvider>, strategy: SubstitutionStrategy) -> Self {
        Self {
            service: AppService::new(provider, strategy),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let mut gemini = GeminiService::new(config.api_key.clone());
        if let Some(base_url) = &config.provider_base_url {
            gemini = gemini.with_base_url(base_url.clone());
        }

        Self::new(Arc::new(gemini), config.substitution)
    }
}

/// Ingress policy shared by every route. Built once per process.
#[derive(Clone)]
pub struct Gateway {
    pub allowed_origins: AllowedOrigins,
    pub rate_limiter: RateLimiter,
}

impl Gateway {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            allowed_origins: AllowedOrigins::new(config.allowed_origins.iter().cloned()),
            rate_limiter: RateLimiter::new(config.rate_limit),
        }
    }
}
