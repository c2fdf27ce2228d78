//! Register and login form submissions with per-field error messages.
//!
//! A form is built from the raw submission, validated once, and either
//! handed to the auth service or rendered back to the caller with its
//! messages. It never outlives the request.

use serde::Deserialize;

use crate::auth::validators::{
    is_valid_email, is_valid_password, is_valid_username, MAX_PASSWORD_LENGTH,
    MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH,
};
use crate::error::AppError;

const INVALID_EMAIL: &str = "Invalid email address";

fn username_message() -> String {
    format!(
        "Username must be between {MIN_USERNAME_LENGTH} and {MAX_USERNAME_LENGTH} characters long"
    )
}

fn password_message() -> String {
    format!(
        "Password must be between {MIN_PASSWORD_LENGTH} and {MAX_PASSWORD_LENGTH} characters long"
    )
}

/// Raw `application/x-www-form-urlencoded` registration body
#[derive(Debug, Deserialize)]
pub struct RegisterSubmission {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Raw `application/x-www-form-urlencoded` login body
#[derive(Debug, Deserialize)]
pub struct LoginSubmission {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterFields {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterErrors {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub values: RegisterFields,
    pub errors: RegisterErrors,
}

impl RegisterForm {
    pub fn from_submission(submission: RegisterSubmission) -> Self {
        let values = RegisterFields {
            username: submission.username.trim().to_string(),
            email: submission.email.trim().to_string(),
            password: submission.password.trim().to_string(),
        };

        let errors = RegisterErrors {
            username: (!is_valid_username(&values.username)).then(username_message),
            email: (!is_valid_email(&values.email)).then(|| INVALID_EMAIL.to_string()),
            password: (!is_valid_password(&values.password)).then(password_message),
        };

        Self { values, errors }
    }

    pub fn has_errors(&self) -> bool {
        self.errors.username.is_some() || self.errors.email.is_some() || self.errors.password.is_some()
    }

    /// Re-render the form; the password is never echoed back.
    pub fn render(&self, action: &str) -> String {
        let mut html = format!(r#"<form id="register-form" method="post" action="{}">"#, escape(action));
        push_field(&mut html, "username", "text", &self.values.username, self.errors.username.as_deref());
        push_field(&mut html, "email", "email", &self.values.email, self.errors.email.as_deref());
        push_field(&mut html, "password", "password", "", self.errors.password.as_deref());
        html.push_str(r#"<button type="submit">Sign up</button></form>"#);
        html
    }

    pub fn into_validation_error(self, action: &str) -> AppError {
        AppError::validation("Registration form has errors", self.render(action))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub values: LoginFields,
    pub errors: LoginErrors,
}

impl LoginForm {
    pub fn from_submission(submission: LoginSubmission) -> Self {
        let values = LoginFields {
            email: submission.email.trim().to_string(),
            password: submission.password.trim().to_string(),
        };

        let errors = LoginErrors {
            email: (!is_valid_email(&values.email)).then(|| INVALID_EMAIL.to_string()),
            password: (!is_valid_password(&values.password)).then(password_message),
        };

        Self { values, errors }
    }

    pub fn has_errors(&self) -> bool {
        self.errors.email.is_some() || self.errors.password.is_some()
    }

    pub fn render(&self, action: &str) -> String {
        let mut html = format!(r#"<form id="login-form" method="post" action="{}">"#, escape(action));
        push_field(&mut html, "email", "email", &self.values.email, self.errors.email.as_deref());
        push_field(&mut html, "password", "password", "", self.errors.password.as_deref());
        html.push_str(r#"<button type="submit">Log in</button></form>"#);
        html
    }

    pub fn into_validation_error(self, action: &str) -> AppError {
        AppError::validation("Login form has errors", self.render(action))
    }
}

fn push_field(html: &mut String, name: &str, kind: &str, value: &str, error: Option<&str>) {
    html.push_str(&format!(
        r#"<label for="{name}">{name}</label><input id="{name}" name="{name}" type="{kind}" value="{}">"#,
        escape(value)
    ));
    if let Some(error) = error {
        html.push_str(&format!(r#"<p class="field-error" data-field="{name}">{}</p>"#, escape(error)));
    }
}

/// Minimal HTML escaping for attribute and text positions.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
