use actix_web::http::header::LOCATION;
use actix_web::{web, HttpResponse, HttpResponseBuilder, Result};
use time::OffsetDateTime;

use crate::auth::cookie::{expired_session_cookie, session_cookie};
use crate::error::AppError;
use crate::forms::{LoginForm, LoginSubmission, RegisterForm, RegisterSubmission};
use crate::http::toast::Toast;
use crate::http::{HX_REDIRECT, HX_TRIGGER};
use crate::services::auth::{self, SessionGrant};
use crate::state::app_state::AppState;

/// 303 with `HX-Redirect`; these endpoints are posted to by HTMX forms
/// and by plain forms alike.
fn redirect(location: &str) -> HttpResponseBuilder {
    let mut builder = HttpResponse::SeeOther();
    builder
        .insert_header((LOCATION, location.to_string()))
        .insert_header((HX_REDIRECT, location.to_string()));
    builder
}

/// Set the session cookie and send the caller to the landing page.
fn signed_in(app_state: &AppState, grant: SessionGrant) -> Result<HttpResponse, AppError> {
    let cookie = session_cookie(grant.token, &app_state.security, OffsetDateTime::now_utc())?;
    let mut builder = redirect(&app_state.routes.landing_path);
    builder.cookie(cookie);
    if let Some(toast) = Toast::success(format!("Welcome, {}", grant.username)).header_value() {
        builder.insert_header((HX_TRIGGER, toast));
    }
    Ok(builder.finish())
}

async fn register(
    submission: web::Form<RegisterSubmission>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let form = RegisterForm::from_submission(submission.into_inner());
    let grant = auth::register(app_state.users.as_ref(), &app_state.tokens, form).await?;
    signed_in(&app_state, grant)
}

async fn login(
    submission: web::Form<LoginSubmission>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let form = LoginForm::from_submission(submission.into_inner());
    let grant = auth::login(app_state.users.as_ref(), &app_state.tokens, form).await?;
    signed_in(&app_state, grant)
}

async fn logout(app_state: web::Data<AppState>) -> HttpResponse {
    redirect(&app_state.routes.login_path)
        .cookie(expired_session_cookie(&app_state.security))
        .finish()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(|err, _req| {
        AppError::bad_request("INVALID_FORM", format!("Unable to parse form: {err}")).into()
    }))
    .service(web::resource("/register").route(web::post().to(register)))
    .service(web::resource("/login").route(web::post().to(login)))
    .service(web::resource("/logout").route(web::post().to(logout)));
}
