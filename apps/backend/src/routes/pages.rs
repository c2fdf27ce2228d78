//! Minimal server-rendered pages around the auth flow.

use actix_web::http::header::ContentType;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::extractors::identity::Identity;
use crate::forms::{escape, LoginForm, RegisterForm};
use crate::http::see_other;
use crate::services::auth::{LOGIN_ACTION, REGISTER_ACTION};
use crate::state::app_state::AppState;

fn page(title: &str, body: &str) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{}</title></head><body>{body}</body></html>",
        escape(title)
    ))
}

/// Where `configure_public_routes` serves the sign-up page once mounted on `/auth`.
pub const REGISTER_PAGE: &str = "/auth/register";

async fn login_page() -> HttpResponse {
    let form = LoginForm::default().render(LOGIN_ACTION);
    page(
        "Log in",
        &format!(
            "<h1>Log in</h1>{form}<p><a href=\"{}\">Create an account</a></p>",
            escape(REGISTER_PAGE)
        ),
    )
}

async fn register_page(app_state: web::Data<AppState>) -> HttpResponse {
    let form = RegisterForm::default().render(REGISTER_ACTION);
    page(
        "Sign up",
        &format!(
            "<h1>Sign up</h1>{form}<p><a href=\"{}\">Already registered?</a></p>",
            escape(&app_state.routes.login_path)
        ),
    )
}

async fn contacts(identity: Identity) -> HttpResponse {
    page(
        "Contacts",
        &format!(
            "<h1>Contacts</h1><p>Signed in as <strong>{}</strong></p>\
             <form method=\"post\" action=\"/api/auth/logout\"><button type=\"submit\">Log out</button></form>",
            escape(&identity.username)
        ),
    )
}

async fn home(req: HttpRequest, app_state: web::Data<AppState>) -> HttpResponse {
    see_other(req.headers(), &app_state.routes.landing_path).finish()
}

/// `/auth/*` pages, meant to sit behind `RedirectIfAuthenticated`.
pub fn configure_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/login").route(web::get().to(login_page)))
        .service(web::resource("/register").route(web::get().to(register_page)));
}

/// `/contacts`, meant to sit behind `SessionGate`.
pub fn configure_protected_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::get().to(contacts)));
}

pub fn configure_root(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(home)));
}
