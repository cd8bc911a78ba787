// SPDX-License-Identifier: GPL-3.0-only
use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::Response;
use std::convert::Infallible;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "cafe_session";

/// Browser session identified by a random id cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub id: Uuid,
    is_new: bool,
}

impl Session {
    /// Reuse the session cookie if present and well formed, otherwise start a new session.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let existing = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == SESSION_COOKIE)
            .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok());

        match existing {
            Some(id) => Self { id, is_new: false },
            None => Self {
                id: Uuid::new_v4(),
                is_new: true,
            },
        }
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }

    pub fn cookie(&self) -> String {
        format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, self.id)
    }

    /// Add the `Set-Cookie` header for sessions started by this request.
    pub fn attach(&self, mut response: Response) -> Response {
        if self.is_new {
            if let Ok(value) = HeaderValue::from_str(&self.cookie()) {
                response.headers_mut().append(SET_COOKIE, value);
            }
        }
        response
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    fn headers_with_cookie(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn test_existing_session_reused() {
        let id = Uuid::new_v4();
        let session = Session::from_headers(&headers_with_cookie(&format!(
            "theme=dark; {}={}",
            SESSION_COOKIE, id
        )));
        assert_eq!(session.id, id);
        assert!(!session.is_new());
    }

    #[test]
    fn test_missing_cookie_starts_session() {
        let session = Session::from_headers(&HeaderMap::new());
        assert!(session.is_new());
    }

    #[test]
    fn test_malformed_cookie_starts_session() {
        let session = Session::from_headers(&headers_with_cookie("cafe_session=not-a-uuid"));
        assert!(session.is_new());
    }

    #[test]
    fn test_attach_only_for_new_sessions() {
        let fresh = Session::from_headers(&HeaderMap::new());
        let response = fresh.attach("ok".into_response());
        let cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cookie.starts_with(&format!("{}={}", SESSION_COOKIE, fresh.id)));
        assert!(cookie.contains("HttpOnly"));

        let known = Session::from_headers(&headers_with_cookie(&format!(
            "{}={}",
            SESSION_COOKIE,
            Uuid::new_v4()
        )));
        let response = known.attach("ok".into_response());
        assert!(response.headers().get(SET_COOKIE).is_none());
    }
}
