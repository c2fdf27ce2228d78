use actix_web::web;

use crate::middleware::{RedirectIfAuthenticated, SessionGate};

pub mod auth;
pub mod health;
pub mod pages;

/// Register every route with its auth middleware.
///
/// `main.rs` adds the request tracing/logging wrappers around the whole app;
/// tests call this directly with or without them.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.configure(health::configure_routes);

    // Form handlers: /api/auth/**
    cfg.service(web::scope("/api/auth").configure(auth::configure_routes));

    // Login and registration pages: /auth/**
    cfg.service(
        web::scope("/auth")
            .wrap(RedirectIfAuthenticated)
            .configure(pages::configure_public_routes),
    );

    // Protected landing page: /contacts
    cfg.service(
        web::scope("/contacts")
            .wrap(SessionGate)
            .configure(pages::configure_protected_routes),
    );

    cfg.configure(pages::configure_root);
}
