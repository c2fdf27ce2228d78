//! Session cookie middleware for protected pages.
//!
//! Reads the `token` cookie, verifies it with the application's
//! `TokenCodec`, and stores the resulting `Identity` in request extensions
//! before calling the wrapped service. Any failure ends the request with a
//! 303 to the configured login route; the wrapped service is not called.

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::auth::cookie::{expired_session_cookie, SESSION_COOKIE};
use crate::extractors::identity::Identity;
use crate::http::see_other;
use crate::logging::security;
use crate::state::app_state::AppState;

pub struct SessionGate;

impl<S, B> Transform<S, ServiceRequest> for SessionGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionGateMiddleware { service }))
    }
}

pub struct SessionGateMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for SessionGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Get AppState - must be available
        let app_state = match req.app_data::<web::Data<AppState>>().cloned() {
            Some(state) => state,
            None => {
                return Box::pin(async {
                    Err(actix_web::error::ErrorInternalServerError(
                        "AppState not available",
                    ))
                });
            }
        };

        // An empty value fails verification below and is cleared like any other.
        let token = req
            .cookie(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string());

        let Some(token) = token else {
            security::session_missing(req.path());
            let response = see_other(req.headers(), &app_state.routes.login_path).finish();
            return Box::pin(ready(Ok(req.into_response(response).map_into_right_body())));
        };

        match app_state.tokens.verify(&token) {
            Ok(claims) => {
                // Store identity in request extensions BEFORE calling the service
                req.extensions_mut().insert(Identity::from(&claims));

                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(err) => {
                security::session_rejected(err, req.path());
                let response = see_other(req.headers(), &app_state.routes.login_path)
                    .cookie(expired_session_cookie(&app_state.security))
                    .finish();
                Box::pin(ready(Ok(req.into_response(response).map_into_right_body())))
            }
        }
    }
}
