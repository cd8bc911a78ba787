// SPDX-License-Identifier: GPL-3.0-only
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Form field carrying the token.
pub const CSRF_FIELD: &str = "csrf_token";
pub const INVALID_TOKEN_MESSAGE: &str = "The CSRF token is missing or invalid.";

/// Token bound to both the server secret and the caller's session.
pub fn issue_token(secret_key: &str, session_id: &Uuid) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret_key.as_bytes());
    hasher.update(b":");
    hasher.update(session_id.as_bytes());
    hex::encode(hasher.finalize())
}

pub fn verify_token(secret_key: &str, session_id: &Uuid, submitted: Option<&str>) -> bool {
    match submitted {
        Some(token) => constant_time_eq(token.as_bytes(), issue_token(secret_key, session_id).as_bytes()),
        None => false,
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_stable_per_session() {
        let session = Uuid::new_v4();
        let token = issue_token("secret", &session);
        assert_eq!(token.len(), 64);
        assert_eq!(token, issue_token("secret", &session));
        assert!(verify_token("secret", &session, Some(&token)));
    }

    #[test]
    fn test_token_bound_to_session_and_secret() {
        let session = Uuid::new_v4();
        let token = issue_token("secret", &session);
        assert!(!verify_token("secret", &Uuid::new_v4(), Some(&token)));
        assert!(!verify_token("other-secret", &session, Some(&token)));
    }

    #[test]
    fn test_missing_or_garbled_token() {
        let session = Uuid::new_v4();
        assert!(!verify_token("secret", &session, None));
        assert!(!verify_token("secret", &session, Some("")));
        assert!(!verify_token("secret", &session, Some("abc")));
    }
}
