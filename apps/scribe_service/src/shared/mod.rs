pub mod api_error;
pub mod origin_middleware;
pub mod rate_limit_middleware;
pub mod request_log_middleware;
