use std::{
    collections::{HashMap, VecDeque},
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::config::RateLimitConfig;

pub const RATE_LIMIT_MESSAGE: &str =
    "Too many requests from this IP, please try again after 10 minutes";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    Allowed { remaining: usize },
    Limited { retry_after: Duration },
}

struct Clients {
    hits: HashMap<String, VecDeque<Instant>>,
    last_sweep: Option<Instant>,
}

/// Sliding-window request counter keyed by client.
#[derive(Clone)]
pub struct RateLimiter {
    config: RateLimitConfig,
    clients: Arc<Mutex<Clients>>,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            clients: Arc::new(Mutex::new(Clients {
                hits: HashMap::new(),
                last_sweep: None,
            })),
        }
    }

    pub fn trust_proxy(&self) -> bool {
        self.config.trust_proxy
    }

    pub fn try_acquire(&self, key: &str) -> RateLimitDecision {
        self.try_acquire_at(key, Instant::now())
    }

    /// Records a request from `key` at `now` if it fits in the window.
    /// Check and increment happen under one lock.
    pub fn try_acquire_at(&self, key: &str, now: Instant) -> RateLimitDecision {
        let window = self.config.window;
        let mut clients = self
            .clients
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        // Idle clients are dropped at most once per window.
        let sweep_due = clients
            .last_sweep
            .map_or(true, |last| now.saturating_duration_since(last) >= window);
        if sweep_due {
            clients.hits.retain(|_, hits| {
                expire(hits, now, window);
                !hits.is_empty()
            });
            clients.last_sweep = Some(now);
        }

        let hits = clients.hits.entry(key.to_string()).or_default();
        expire(hits, now, window);

        if hits.len() >= self.config.max_requests {
            let retry_after = hits
                .front()
                .map(|oldest| window.saturating_sub(now.saturating_duration_since(*oldest)))
                .unwrap_or(window);
            return RateLimitDecision::Limited { retry_after };
        }

        hits.push_back(now);
        RateLimitDecision::Allowed {
            remaining: self.config.max_requests - hits.len(),
        }
    }

    #[cfg(test)]
    fn tracked_clients(&self) -> usize {
        self.clients
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .hits
            .len()
    }
}

fn expire(hits: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(oldest) = hits.front() {
        if now.saturating_duration_since(*oldest) >= window {
            hits.pop_front();
        } else {
            break;
        }
    }
}

/// The peer address, or the first `X-Forwarded-For` hop when `trust_proxy`
/// is set. The header is client-controlled and ignored otherwise.
pub fn client_key(headers: &HeaderMap, peer: Option<SocketAddr>, trust_proxy: bool) -> String {
    let forwarded = trust_proxy
        .then(|| headers.get("x-forwarded-for"))
        .flatten()
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_string);

    forwarded
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
        .unwrap_or_else(|| "unknown".to_string())
}

pub async fn rate_limit(
    State(limiter): State<RateLimiter>,
    request: Request,
    next: Next,
) -> Response {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let key = client_key(request.headers(), peer, limiter.trust_proxy());

    match limiter.try_acquire(&key) {
        RateLimitDecision::Allowed { remaining } => {
            let mut response = next.run(request).await;
            response
                .headers_mut()
                .insert("ratelimit-remaining", HeaderValue::from(remaining));
            response
        }
        RateLimitDecision::Limited { retry_after } => {
            tracing::warn!(client = %key, "Rate limit exceeded");
            let mut response = (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({ "error": RATE_LIMIT_MESSAGE })),
            )
                .into_response();
            response.headers_mut().insert(
                header::RETRY_AFTER,
                HeaderValue::from(retry_after.as_secs().max(1)),
            );
            response
        }
    }
}
