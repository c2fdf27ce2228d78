//! Keeps signed-in callers away from the login and registration pages.
//!
//! A non-empty session cookie is enough; the token is not verified here.
//! A stale cookie therefore bounces the caller to the landing page, where
//! `SessionGate` clears it and sends them back to login.

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, Error};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::{debug, warn};

use crate::auth::cookie::SESSION_COOKIE;
use crate::http::see_other;
use crate::state::app_state::AppState;

pub struct RedirectIfAuthenticated;

impl<S, B> Transform<S, ServiceRequest> for RedirectIfAuthenticated
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RedirectIfAuthenticatedMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RedirectIfAuthenticatedMiddleware { service }))
    }
}

pub struct RedirectIfAuthenticatedMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RedirectIfAuthenticatedMiddleware<S>
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
        // Unparseable cookies fail open to the public page.
        let has_session = match req.cookies() {
            Ok(cookies) => cookies
                .iter()
                .any(|c| c.name() == SESSION_COOKIE && !c.value().is_empty()),
            Err(e) => {
                warn!(error = %e, path = req.path(), "error retrieving cookies");
                false
            }
        };

        if has_session {
            let landing = req
                .app_data::<web::Data<AppState>>()
                .map(|state| state.routes.landing_path.clone());

            if let Some(landing) = landing {
                debug!(path = req.path(), "authenticated caller on auth page, redirecting");
                let response = see_other(req.headers(), &landing).finish();
                return Box::pin(ready(Ok(req.into_response(response).map_into_right_body())));
            }

            return Box::pin(async {
                Err(actix_web::error::ErrorInternalServerError(
                    "AppState not available",
                ))
            });
        }

        let fut = self.service.call(req);
        Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
    }
}
