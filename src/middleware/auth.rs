use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth;
use crate::config;
use crate::error::ApiError;

/// Proven caller identity carried for the lifetime of one request.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Request-scoped identity context attached by the resolver middleware.
///
/// Anonymous is the default, not an error: a request without a credential
/// (or with one that fails verification) proceeds as anonymous and is only
/// rejected later, by handlers that require authentication.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestIdentity {
    Anonymous,
    Authenticated(AuthUser),
}

impl RequestIdentity {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, RequestIdentity::Authenticated(_))
    }

    /// Authorization gate: the first call of every mutating or
    /// identity-scoped handler, before validation and storage access.
    pub fn require(&self) -> Result<&AuthUser, ApiError> {
        match self {
            RequestIdentity::Authenticated(user) => Ok(user),
            RequestIdentity::Anonymous => Err(ApiError::unauthenticated("Not authenticated")),
        }
    }
}

/// Identity resolver middleware. Runs unconditionally on every route and
/// never fails the request itself; it only decides which identity the
/// downstream handler sees.
pub async fn identity_middleware(headers: HeaderMap, mut request: Request, next: Next) -> Response {
    let secret = &config::config().security.jwt_secret;
    let identity = resolve_identity(&headers, secret);
    request.extensions_mut().insert(identity);

    next.run(request).await
}

/// Derive the request identity from the header map.
///
/// Verification failures are swallowed by design: a malformed, tampered or
/// expired token yields the anonymous identity exactly like a missing one.
/// The rejection reason is kept out of responses and logged at debug level
/// only, since the caller's claimed identity is unproven at this point.
pub fn resolve_identity(headers: &HeaderMap, secret: &str) -> RequestIdentity {
    let Some(token) = bearer_token(headers) else {
        return RequestIdentity::Anonymous;
    };

    match auth::verify_token(token, secret) {
        Ok(claims) => RequestIdentity::Authenticated(AuthUser {
            user_id: claims.user_id,
            email: claims.email,
        }),
        Err(err) => {
            tracing::debug!("bearer token rejected: {}", err);
            RequestIdentity::Anonymous
        }
    }
}

/// Extract the bearer credential from the Authorization header, if any.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let auth_str = headers.get("authorization")?.to_str().ok()?;
    let token = auth_str.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SecurityConfig;
    use axum::http::HeaderValue;

    const SECRET: &str = "resolver-test-secret";

    fn security() -> SecurityConfig {
        SecurityConfig {
            enable_cors: false,
            cors_origins: vec![],
            jwt_secret: SECRET.to_string(),
            jwt_expiry_hours: 1,
            bcrypt_cost: 4,
        }
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn no_header_resolves_to_anonymous() {
        let identity = resolve_identity(&HeaderMap::new(), SECRET);
        assert_eq!(identity, RequestIdentity::Anonymous);
        assert!(identity.require().is_err());
    }

    #[test]
    fn garbage_token_is_swallowed_not_raised() {
        let identity = resolve_identity(&headers_with("Bearer complete-garbage"), SECRET);
        assert_eq!(identity, RequestIdentity::Anonymous);
    }

    #[test]
    fn non_bearer_scheme_resolves_to_anonymous() {
        let identity = resolve_identity(&headers_with("Basic dXNlcjpwYXNz"), SECRET);
        assert_eq!(identity, RequestIdentity::Anonymous);
    }

    #[test]
    fn empty_bearer_resolves_to_anonymous() {
        let identity = resolve_identity(&headers_with("Bearer   "), SECRET);
        assert_eq!(identity, RequestIdentity::Anonymous);
    }

    #[test]
    fn token_signed_elsewhere_resolves_to_anonymous() {
        let other = SecurityConfig {
            jwt_secret: "some-other-secret".to_string(),
            ..security()
        };
        let token = crate::auth::issue_token(Uuid::new_v4(), "a@b.com", &other).unwrap();

        let identity = resolve_identity(&headers_with(&format!("Bearer {}", token)), SECRET);
        assert_eq!(identity, RequestIdentity::Anonymous);
    }

    #[test]
    fn valid_token_resolves_to_its_claim() {
        let user_id = Uuid::new_v4();
        let token = crate::auth::issue_token(user_id, "a@b.com", &security()).unwrap();

        let identity = resolve_identity(&headers_with(&format!("Bearer {}", token)), SECRET);
        let user = identity.require().unwrap();
        assert_eq!(user.user_id, user_id);
        assert_eq!(user.email, "a@b.com");
    }
}
