mod common;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};

use common::{location, session_cookie, test_security};
use contacts_backend::{connect_db, routes, AppState, RouteConfig, SeaUserStore};

async fn sqlite_state() -> AppState {
    let db = connect_db("sqlite::memory:")
        .await
        .expect("in-memory sqlite should open");
    AppState::new(
        Arc::new(SeaUserStore::new(db)),
        test_security(),
        RouteConfig::default(),
    )
}

#[actix_web::test]
async fn register_then_login_against_sqlite() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(sqlite_state().await))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_form([
            ("username", "sqliteuser"),
            ("email", "sqlite@example.com"),
            ("password", "sqlite-pass"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert!(session_cookie(&resp).is_some());

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_form([("email", "sqlite@example.com"), ("password", "sqlite-pass")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp).as_deref(), Some("/contacts"));

    let cookie = session_cookie(&resp).expect("login should set the session cookie");
    let req = test::TestRequest::get()
        .uri("/contacts")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn sqlite_unique_email_surfaces_as_conflict() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(sqlite_state().await))
            .configure(routes::configure),
    )
    .await;

    for (username, expected) in [
        ("firstuser", StatusCode::SEE_OTHER),
        ("seconduser", StatusCode::CONFLICT),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_form([
                ("username", username),
                ("email", "same@example.com"),
                ("password", "sqlite-pass"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected, "{username}");
    }
}

#[actix_web::test]
async fn health_pings_sqlite() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(sqlite_state().await))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
