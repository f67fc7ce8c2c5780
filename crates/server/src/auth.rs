//! Admin guard: accepts `Authorization: Bearer <jwt>` or the `auth_token` cookie.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;
use tracing::warn;

use crate::errors::JsonApiError;
use crate::state::AppState;

pub const AUTH_COOKIE: &str = "auth_token";

#[derive(Debug, PartialEq)]
pub(crate) enum Credential {
    Token(String),
    Malformed,
    Missing,
}

/// The header wins over the cookie; a non-Bearer header is malformed.
pub(crate) fn credential(headers: &HeaderMap) -> Credential {
    if let Some(value) = headers.get(AUTHORIZATION) {
        return match value.to_str().ok().and_then(|h| h.strip_prefix("Bearer ")) {
            Some(t) if !t.trim().is_empty() => Credential::Token(t.trim().to_string()),
            _ => Credential::Malformed,
        };
    }
    match CookieJar::from_headers(headers).get(AUTH_COOKIE) {
        Some(c) if !c.value().is_empty() => Credential::Token(c.value().to_string()),
        _ => Credential::Missing,
    }
}

/// Missing credentials ⇒ 400, bad or expired token ⇒ 401. Verified claims are
/// stored in the request extensions.
pub async fn require_auth(State(state): State<AppState>, mut req: Request, next: Next) -> Result<Response, JsonApiError> {
    let path = req.uri().path().to_string();
    let token = match credential(req.headers()) {
        Credential::Token(t) => t,
        Credential::Malformed => {
            warn!(%path, "invalid Authorization format (expect Bearer)");
            return Err(JsonApiError::unauthorized("invalid Authorization header"));
        }
        Credential::Missing => {
            warn!(%path, "missing Authorization header and auth_token cookie");
            return Err(JsonApiError::bad_request("missing access token"));
        }
    };
    match state.auth.verify_token(&token) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            Ok(next.run(req).await)
        }
        Err(e) => {
            warn!(%path, err = %e, "token validation failed");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::COOKIE;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(axum::http::HeaderName, &str)]) -> HeaderMap {
        let mut h = HeaderMap::new();
        for (k, v) in pairs {
            h.insert(k.clone(), HeaderValue::from_str(v).unwrap());
        }
        h
    }

    #[test]
    fn bearer_header_is_preferred() {
        let h = headers(&[(AUTHORIZATION, "Bearer abc"), (COOKIE, "auth_token=xyz")]);
        assert_eq!(credential(&h), Credential::Token("abc".into()));
    }

    #[test]
    fn cookie_fallback() {
        let h = headers(&[(COOKIE, "theme=dark; auth_token=xyz")]);
        assert_eq!(credential(&h), Credential::Token("xyz".into()));
    }

    #[test]
    fn basic_scheme_is_malformed() {
        let h = headers(&[(AUTHORIZATION, "Basic Zm9vOmJhcg==")]);
        assert_eq!(credential(&h), Credential::Malformed);
    }

    #[test]
    fn nothing_is_missing() {
        assert_eq!(credential(&HeaderMap::new()), Credential::Missing);
        assert_eq!(credential(&headers(&[(COOKIE, "auth_token=")])), Credential::Missing);
    }
}
