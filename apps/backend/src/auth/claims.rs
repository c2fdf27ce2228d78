//! Session token payloads.

use serde::{Deserialize, Serialize};

/// Fixed JOSE header carried by every session token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Header {
    pub alg: String,
    pub typ: String,
}

impl Header {
    pub const ALG: &'static str = "HS256";
    pub const TYP: &'static str = "JWT";

    pub fn hs256() -> Self {
        Self {
            alg: Self::ALG.to_string(),
            typ: Self::TYP.to_string(),
        }
    }

    pub fn is_hs256_jwt(&self) -> bool {
        self.alg == Self::ALG && self.typ == Self::TYP
    }
}

/// Claims included in session tokens.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// User id (users.id)
    pub sub: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    pub email: String,
    pub username: String,
}
