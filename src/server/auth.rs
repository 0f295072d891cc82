//! Bearer token extraction

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use super::error::AppError;

/// Token taken from `Authorization: Bearer <token>`.
///
/// The token is the second space-separated word of the header, whatever the
/// scheme. A missing header or word rejects the request with 401.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(pub String);

impl BearerToken {
    /// Parse an `Authorization` header value
    pub fn parse(header: &str) -> Option<Self> {
        header
            .split(' ')
            .nth(1)
            .filter(|token| !token.is_empty())
            .map(|token| Self(token.to_string()))
    }

    /// The raw token
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(BearerToken::parse)
            .ok_or_else(AppError::missing_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bearer() {
        assert_eq!(
            BearerToken::parse("Bearer gho_abc"),
            Some(BearerToken("gho_abc".to_string()))
        );
    }

    #[test]
    fn test_parse_ignores_scheme() {
        assert_eq!(BearerToken::parse("token gho_abc").unwrap().as_str(), "gho_abc");
    }

    #[test]
    fn test_parse_rejects_missing_token() {
        assert_eq!(BearerToken::parse("Bearer"), None);
        assert_eq!(BearerToken::parse("Bearer "), None);
        assert_eq!(BearerToken::parse(""), None);
    }
}
