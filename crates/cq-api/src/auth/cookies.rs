use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::state::AuthConfig;

pub const AUTH_COOKIE: &str = "auth_token";

/// Session cookie carrying the JWT. Stored in the private jar, so the value
/// is encrypted on the wire.
pub fn create_auth_cookie(token: String, config: &AuthConfig) -> Cookie<'static> {
    let mut cookie = Cookie::build((AUTH_COOKIE, token))
        .path("/")
        .max_age(time::Duration::hours(config.jwt_expiry_hours))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(!config.environment.is_development())
        .build();

    if let Some(domain) = &config.cookie_domain {
        cookie.set_domain(domain.clone());
    }

    cookie
}

/// Cookie used to clear the session. Path and domain must match the
/// original for browsers to drop it.
pub fn removal_cookie(config: &AuthConfig) -> Cookie<'static> {
    let mut cookie = Cookie::build((AUTH_COOKIE, "")).path("/").build();
    if let Some(domain) = &config.cookie_domain {
        cookie.set_domain(domain.clone());
    }
    cookie
}
