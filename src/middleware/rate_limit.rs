/**
 * Rate Limiting
 *
 * A process-wide limiter in front of the public auth routes, keeping
 * brute-force registration/login traffic in check. Parameters come from
 * `RateLimitConfig` (max requests over a window, default 100 per 15
 * minutes); the quota allows the full window budget as a burst.
 */

use std::num::NonZeroU32;
use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};

use crate::error::ApiError;
use crate::server::config::RateLimitConfig;
use crate::server::state::AppState;

/// The limiter type held in application state
pub type AuthRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Build a limiter from the configured window and budget
pub fn build_limiter(config: &RateLimitConfig) -> AuthRateLimiter {
    let burst = NonZeroU32::new(config.max_requests).unwrap_or(NonZeroU32::MIN);
    let period = Duration::from_secs(config.window_secs.max(1)) / burst.get();

    let quota = Quota::with_period(period)
        .unwrap_or_else(|| Quota::per_second(burst))
        .allow_burst(burst);

    RateLimiter::direct(quota)
}

/// Rate limiting middleware for the unauthenticated auth routes
pub async fn limit_requests(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    state.rate_limiter.check().map_err(|_| {
        tracing::warn!("Rate limit exceeded on {}", request.uri().path());
        ApiError::TooManyRequests
    })?;

    Ok(next.run(request).await)
}
