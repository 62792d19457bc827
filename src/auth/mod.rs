use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::SecurityConfig;

/// Identity claim embedded in every bearer token. Immutable once issued and
/// never persisted server-side; the signature is the only state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: Uuid,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(user_id: Uuid, email: String, expiry_hours: u64) -> Self {
        let now = Utc::now();
        let exp = (now + Duration::hours(expiry_hours as i64)).timestamp();

        Self {
            user_id,
            email,
            exp,
            iat: now.timestamp(),
        }
    }
}

/// Why a token was rejected (or could not be produced).
#[derive(Debug, PartialEq)]
pub enum TokenError {
    /// The token is not a parseable JWT at all.
    Malformed,
    /// The signature does not match the verifying secret.
    SignatureInvalid,
    /// Signature checks out but the embedded expiry has passed.
    Expired,
    /// Signing failed while issuing a token.
    Generation(String),
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenError::Malformed => write!(f, "malformed token"),
            TokenError::SignatureInvalid => write!(f, "token signature invalid"),
            TokenError::Expired => write!(f, "token expired"),
            TokenError::Generation(msg) => write!(f, "token generation error: {}", msg),
        }
    }
}

impl std::error::Error for TokenError {}

/// Sign an identity claim into a bearer token.
pub fn issue_token(user_id: Uuid, email: &str, security: &SecurityConfig) -> Result<String, TokenError> {
    let claims = Claims::new(user_id, email.to_string(), security.jwt_expiry_hours);
    let encoding_key = EncodingKey::from_secret(security.jwt_secret.as_bytes());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| TokenError::Generation(e.to_string()))
}

/// Verify a bearer token and decode the claim it carries.
///
/// Pure function: no clock mutation, no I/O. Expiry is checked with zero
/// leeway so a token is invalid the second its `exp` passes.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::default();
    validation.leeway = 0;

    let token_data = decode::<Claims>(token, &decoding_key, &validation).map_err(|e| {
        use jsonwebtoken::errors::ErrorKind;
        match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
            _ => TokenError::Malformed,
        }
    })?;

    Ok(token_data.claims)
}

/// Hash a password with a per-call salt and the configured work factor.
pub fn hash_password(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, cost)
}

/// Check a password against a stored digest. Malformed digests are treated
/// as a mismatch rather than an error, so this can never fail a login path
/// with anything other than "incorrect".
pub fn verify_password(password: &str, digest: &str) -> bool {
    bcrypt::verify(password, digest).unwrap_or(false)
}
