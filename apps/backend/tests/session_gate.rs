mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, SystemTime};

use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::{test, web, App, HttpResponse};

use common::{header, location, session_cookie, test_state, test_state_with_routes};
use contacts_backend::auth::cookie::SESSION_COOKIE;
use contacts_backend::{AppState, Identity, SessionGate};

async fn whoami(identity: Identity, hits: web::Data<AtomicUsize>) -> HttpResponse {
    hits.fetch_add(1, Ordering::SeqCst);
    HttpResponse::Ok().json(identity)
}

macro_rules! gated_app {
    ($state:expr, $hits:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data($hits.clone())
                .service(
                    web::scope("/private")
                        .wrap(SessionGate)
                        .route("", web::get().to(whoami)),
                ),
        )
        .await
    };
}

fn token_for(state: &AppState, id: i64, username: &str) -> String {
    state
        .tokens
        .encode(id, username, "someone@example.com")
        .unwrap()
}

#[actix_web::test]
async fn missing_cookie_redirects_without_calling_handler() {
    let hits = web::Data::new(AtomicUsize::new(0));
    let app = gated_app!(test_state(), hits);

    let req = test::TestRequest::get().uri("/private").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp).as_deref(), Some("/auth/login"));
    assert_eq!(header(&resp, "hx-redirect"), None);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[actix_web::test]
async fn empty_cookie_is_rejected_and_cleared() {
    let hits = web::Data::new(AtomicUsize::new(0));
    let app = gated_app!(test_state(), hits);

    let req = test::TestRequest::get()
        .uri("/private")
        .cookie(Cookie::new(SESSION_COOKIE, ""))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp).as_deref(), Some("/auth/login"));
    let cleared = session_cookie(&resp).expect("empty cookie is cleared");
    assert_eq!(cleared.value(), "");
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[actix_web::test]
async fn valid_cookie_attaches_identity() {
    let hits = web::Data::new(AtomicUsize::new(0));
    let state = test_state();
    let token = token_for(&state, 42, "someone");
    let app = gated_app!(state, hits);

    let req = test::TestRequest::get()
        .uri("/private")
        .cookie(Cookie::new(SESSION_COOKIE, token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 42);
    assert_eq!(body["username"], "someone");
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[actix_web::test]
async fn tampered_cookie_redirects_and_clears_session() {
    let hits = web::Data::new(AtomicUsize::new(0));
    let state = test_state();
    let token = token_for(&state, 42, "someone");
    let (signing_input, signature) = token.rsplit_once('.').unwrap();
    let first = if signature.starts_with('A') { 'B' } else { 'A' };
    let tampered = format!("{signing_input}.{first}{}", &signature[1..]);
    let app = gated_app!(state, hits);

    let req = test::TestRequest::get()
        .uri("/private")
        .cookie(Cookie::new(SESSION_COOKIE, tampered))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp).as_deref(), Some("/auth/login"));
    let cleared = session_cookie(&resp).expect("session cookie should be cleared");
    assert_eq!(cleared.value(), "");
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[actix_web::test]
async fn expired_cookie_is_rejected() {
    let hits = web::Data::new(AtomicUsize::new(0));
    let state = test_state();
    let issued = SystemTime::now() - state.tokens.ttl() - Duration::from_secs(60);
    let token = state
        .tokens
        .encode_at(42, "someone", "someone@example.com", issued)
        .unwrap();
    let app = gated_app!(state, hits);

    let req = test::TestRequest::get()
        .uri("/private")
        .cookie(Cookie::new(SESSION_COOKIE, token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[actix_web::test]
async fn htmx_requests_get_hx_redirect() {
    let hits = web::Data::new(AtomicUsize::new(0));
    let app = gated_app!(test_state(), hits);

    let req = test::TestRequest::get()
        .uri("/private")
        .insert_header(("HX-Request", "true"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(header(&resp, "hx-redirect").as_deref(), Some("/auth/login"));
}

#[actix_web::test]
async fn configured_login_path_is_used() {
    let hits = web::Data::new(AtomicUsize::new(0));
    let app = gated_app!(test_state_with_routes("/signin", "/home"), hits);

    let req = test::TestRequest::get().uri("/private").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(location(&resp).as_deref(), Some("/signin"));
}

#[actix_web::test]
async fn token_signed_with_another_key_is_rejected() {
    let hits = web::Data::new(AtomicUsize::new(0));
    let other = AppState::in_memory(contacts_backend::SecurityConfig::new(
        b"a-completely-different-signing-key".as_slice(),
    ));
    let token = token_for(&other, 42, "someone");
    let app = gated_app!(test_state(), hits);

    let req = test::TestRequest::get()
        .uri("/private")
        .cookie(Cookie::new(SESSION_COOKIE, token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}
