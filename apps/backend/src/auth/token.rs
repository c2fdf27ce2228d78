//! HS256 session token codec.
//!
//! Tokens are `base64url(header) . base64url(claims) . base64url(hmac)`, all
//! without padding. Verification checks the signature before any header or
//! claim field is interpreted, and checks expiry last.

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use serde::de::DeserializeOwned;
use sha2::Sha256;
use thiserror::Error;

use super::claims::{Claims, Header};
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

type HmacSha256 = Hmac<Sha256>;

/// Why a token was rejected.
///
/// Callers collapse all of these into "unauthenticated"; the distinction only
/// feeds logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("malformed token")]
    Malformed,
    #[error("invalid token signature")]
    InvalidSignature,
    #[error("invalid token header")]
    InvalidHeader,
    #[error("token has expired")]
    Expired,
}

impl TokenError {
    /// Stable identifier for structured logs
    pub fn reason(&self) -> &'static str {
        match self {
            TokenError::Malformed => "malformed_token",
            TokenError::InvalidSignature => "invalid_signature",
            TokenError::InvalidHeader => "invalid_header",
            TokenError::Expired => "token_expired",
        }
    }
}

/// Signs and verifies session tokens with a key fixed at construction.
#[derive(Clone)]
pub struct TokenCodec {
    secret: Arc<[u8]>,
    ttl: Duration,
}

impl TokenCodec {
    pub fn new(security: &SecurityConfig) -> Self {
        Self {
            secret: Arc::from(security.jwt_secret.as_slice()),
            ttl: security.token_ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Mint a token for the given user, issued now.
    pub fn encode(&self, sub: i64, username: &str, email: &str) -> Result<String, AppError> {
        self.encode_at(sub, username, email, SystemTime::now())
    }

    /// Mint a token as if issued at `now`.
    pub fn encode_at(
        &self,
        sub: i64,
        username: &str,
        email: &str,
        now: SystemTime,
    ) -> Result<String, AppError> {
        let iat = now
            .duration_since(UNIX_EPOCH)
            .ok()
            .and_then(|since| i64::try_from(since.as_secs()).ok())
            .ok_or_else(|| AppError::internal("Failed to get current time".to_string()))?;
        let exp = i64::try_from(self.ttl.as_secs())
            .ok()
            .and_then(|ttl| iat.checked_add(ttl))
            .ok_or_else(|| {
                AppError::config(format!("Token TTL of {}s is out of range", self.ttl.as_secs()))
            })?;

        let claims = Claims {
            sub,
            iat,
            exp,
            email: email.to_string(),
            username: username.to_string(),
        };

        let header_json = serde_json::to_vec(&Header::hs256())
            .map_err(|e| AppError::internal(format!("Failed to encode token header: {e}")))?;
        let claims_json = serde_json::to_vec(&claims)
            .map_err(|e| AppError::internal(format!("Failed to encode token claims: {e}")))?;

        let signing_input = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(header_json),
            URL_SAFE_NO_PAD.encode(claims_json)
        );
        let signature = self
            .sign(signing_input.as_bytes())
            .map_err(|_| AppError::crypto("Failed to initialise HMAC".to_string()))?;

        Ok(format!("{signing_input}.{signature}"))
    }

    /// Verify a token against the current time.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, SystemTime::now())
    }

    /// Verify a token as of `now`.
    pub fn verify_at(&self, token: &str, now: SystemTime) -> Result<Claims, TokenError> {
        let parts: Vec<&str> = token.split('.').collect();
        let [header_b64, claims_b64, signature_b64] = parts.as_slice() else {
            return Err(TokenError::Malformed);
        };

        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| TokenError::InvalidSignature)?;
        let mut mac = self.mac().map_err(|_| TokenError::InvalidSignature)?;
        mac.update(header_b64.as_bytes());
        mac.update(b".");
        mac.update(claims_b64.as_bytes());
        // constant-time comparison
        mac.verify_slice(&signature)
            .map_err(|_| TokenError::InvalidSignature)?;

        let header: Header = decode_segment(header_b64).ok_or(TokenError::InvalidHeader)?;
        if !header.is_hs256_jwt() {
            return Err(TokenError::InvalidHeader);
        }

        let claims: Claims = decode_segment(claims_b64).ok_or(TokenError::Malformed)?;

        let now = now
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);
        if claims.exp < now {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    fn mac(&self) -> Result<HmacSha256, hmac::digest::InvalidLength> {
        HmacSha256::new_from_slice(&self.secret)
    }

    fn sign(&self, input: &[u8]) -> Result<String, hmac::digest::InvalidLength> {
        let mut mac = self.mac()?;
        mac.update(input);
        Ok(URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes()))
    }
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("secret", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .finish()
    }
}

fn decode_segment<T: DeserializeOwned>(segment: &str) -> Option<T> {
    let bytes = URL_SAFE_NO_PAD.decode(segment).ok()?;
    serde_json::from_slice(&bytes).ok()
}
