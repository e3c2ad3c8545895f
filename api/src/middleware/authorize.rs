//! Route-level authorization gates.
//!
//! Both gates must be wrapped inside `JwtAuth` so the identity is already
//! attached when they run. They delegate the decision to the policies in
//! `ha_core::services::access`.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
};

use ha_core::errors::AuthError;
use ha_core::services::access::{require_admin, require_ownership_or_admin};

use super::auth::AuthContext;
use crate::handlers::error::ApiError;

/// Path parameter checked by [`RequireOwnershipOrAdmin::default`]
pub const DEFAULT_OWNER_PARAM: &str = "userId";

/// Which policy a [`GateMiddleware`] enforces
#[derive(Debug, Clone)]
enum Policy {
    Admin,
    OwnerOrAdmin { param: &'static str },
}

impl Policy {
    fn check(&self, req: &ServiceRequest) -> Result<(), AuthError> {
        let extensions = req.extensions();
        let claims = extensions.get::<AuthContext>().map(AuthContext::claims);

        match self {
            Policy::Admin => require_admin(claims).map(|_| ()),
            Policy::OwnerOrAdmin { param } => {
                let target = req.match_info().get(param).unwrap_or_default();
                require_ownership_or_admin(claims, target).map(|_| ())
            }
        }
    }
}

/// Only organizers pass
#[derive(Debug, Clone, Copy, Default)]
pub struct RequireAdmin;

/// The user named by a path parameter, or any organizer, passes
#[derive(Debug, Clone, Copy)]
pub struct RequireOwnershipOrAdmin {
    param: &'static str,
}

impl RequireOwnershipOrAdmin {
    pub fn new(param: &'static str) -> Self {
        Self { param }
    }
}

impl Default for RequireOwnershipOrAdmin {
    fn default() -> Self {
        Self::new(DEFAULT_OWNER_PARAM)
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireAdmin
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = GateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(GateMiddleware {
            service: Rc::new(service),
            policy: Policy::Admin,
        }))
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireOwnershipOrAdmin
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = GateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(GateMiddleware {
            service: Rc::new(service),
            policy: Policy::OwnerOrAdmin { param: self.param },
        }))
    }
}

/// Middleware service shared by both gates
pub struct GateMiddleware<S> {
    service: Rc<S>,
    policy: Policy,
}

impl<S, B> Service<ServiceRequest> for GateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if let Err(denied) = self.policy.check(&req) {
            tracing::debug!(path = %req.path(), reason = %denied, "Request denied by authorization gate");
            let response = req.error_response(ApiError::from(denied)).map_into_right_body();
            return Box::pin(async move { Ok(response) });
        }

        let service = Rc::clone(&self.service);
        Box::pin(async move {
            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}
