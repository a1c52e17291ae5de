//! Per-IP rate limits built on `tower_governor`.
//!
//! Clients are keyed with `SmartIpKeyExtractor`: `X-Forwarded-For`,
//! `X-Real-IP` and `Forwarded` first, then the peer address.

/// Credential endpoints (register, login).
pub const AUTH_RATE_PER_SECOND: u64 = 5;
pub const AUTH_BURST_SIZE: u32 = 10;

/// Everything else that needs a session.
pub const GENERAL_RATE_PER_SECOND: u64 = 10;
pub const GENERAL_BURST_SIZE: u32 = 20;

/// Build a `GovernorLayer` replenishing one token every `1 / per_second`
/// seconds with room for `burst` requests.
#[macro_export]
macro_rules! make_rate_limit_layer {
    ($per_second:expr, $burst:expr) => {{
        let config = ::tower_governor::governor::GovernorConfigBuilder::default()
            .per_second($per_second)
            .burst_size($burst)
            .key_extractor(::tower_governor::key_extractor::SmartIpKeyExtractor)
            .use_headers()
            .finish()
            .expect("rate limit period and burst size must be non-zero");
        ::tower_governor::GovernorLayer::new(config)
    }};
}
