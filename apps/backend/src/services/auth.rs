//! Registration and login flows.
//!
//! Both end in a freshly minted session token; the HTTP layer turns it into
//! a cookie.

use tokio::task::spawn_blocking;
use tracing::{error, info};

use crate::auth::password::{hash_password, verify_password, PasswordError};
use crate::auth::token::TokenCodec;
use crate::error::AppError;
use crate::forms::{LoginForm, RegisterForm};
use crate::logging::pii::Redacted;
use crate::logging::security;
use crate::repos::users::UserStore;

pub const REGISTER_ACTION: &str = "/api/auth/register";
pub const LOGIN_ACTION: &str = "/api/auth/login";

/// Outcome of a successful registration or login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionGrant {
    pub token: String,
    pub user_id: i64,
    pub username: String,
}

/// Create an account and sign it in.
pub async fn register(
    users: &dyn UserStore,
    tokens: &TokenCodec,
    form: RegisterForm,
) -> Result<SessionGrant, AppError> {
    if form.has_errors() {
        return Err(form.into_validation_error(REGISTER_ACTION));
    }
    let RegisterForm { values, .. } = form;

    if users.email_exists(&values.email).await? {
        info!(email = %Redacted(&values.email), "registration rejected: email taken");
        return Err(AppError::conflict(
            "EMAIL_TAKEN",
            "Email address already registered".to_string(),
        ));
    }

    let password = values.password;
    let password_hash = spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::internal(format!("password hashing task failed: {e}")))??;

    let user_id = users
        .create_user(&values.username, &values.email, &password_hash)
        .await?;
    let token = tokens.encode(user_id, &values.username, &values.email)?;

    info!(user_id, email = %Redacted(&values.email), "user registered");

    Ok(SessionGrant {
        token,
        user_id,
        username: values.username,
    })
}

/// Check credentials and sign the user in.
///
/// Unknown email and wrong password produce the same error; only the log
/// tells them apart.
pub async fn login(
    users: &dyn UserStore,
    tokens: &TokenCodec,
    form: LoginForm,
) -> Result<SessionGrant, AppError> {
    if form.has_errors() {
        return Err(form.into_validation_error(LOGIN_ACTION));
    }
    let LoginForm { values, .. } = form;

    let Some(user) = users.find_user_by_email(&values.email).await? else {
        security::login_failed("unknown_email", &values.email);
        return Err(AppError::invalid_credentials());
    };

    let password = values.password;
    let digest = user.password_hash.clone();
    let verified = spawn_blocking(move || verify_password(&password, &digest))
        .await
        .map_err(|e| AppError::internal(format!("password check task failed: {e}")))?;

    match verified {
        Ok(()) => {}
        Err(PasswordError::Mismatch) => {
            security::login_failed("wrong_password", &values.email);
            return Err(AppError::invalid_credentials());
        }
        Err(PasswordError::MalformedHash) => {
            error!(user_id = user.id, "stored password hash is malformed");
            return Err(AppError::crypto("stored password hash is malformed".to_string()));
        }
    }

    let token = tokens.encode(user.id, &user.username, &user.email)?;
    info!(user_id = user.id, "user logged in");

    Ok(SessionGrant {
        token,
        user_id: user.id,
        username: user.username,
    })
}
