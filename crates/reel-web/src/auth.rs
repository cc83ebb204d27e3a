//! Bearer token authentication and role checks.

use std::future::{Ready, ready};
use std::marker::PhantomData;
use std::sync::Arc;

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use uuid::Uuid;

use reel_core::domain::Role;
use reel_core::ports::{AuthError, TokenClaims, TokenService};

use crate::error::AppError;

/// Authenticated caller, decoded from the `Authorization: Bearer` header.
///
/// Requires `web::Data<Arc<dyn TokenService>>` in app data:
/// ```ignore
/// async fn protected_route(identity: Identity) -> AppResult<HttpResponse> {
///     identity.require_role(Role::Admin)?;
///     Ok(HttpResponse::Ok().finish())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: String,
    pub role: Role,
}

impl Identity {
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }

    /// Fails with 403 unless the caller holds `role`.
    pub fn require_role(&self, role: Role) -> Result<(), AppError> {
        if self.has_role(role) {
            return Ok(());
        }

        tracing::debug!(
            user_id = %self.user_id,
            role = %self.role,
            required = %role,
            "Role check failed"
        );
        Err(AppError::from(AuthError::InsufficientPermissions))
    }
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.user_id,
            email: claims.email,
            role: claims.role,
        }
    }
}

fn authenticate(req: &HttpRequest) -> Result<Identity, AppError> {
    let token_service = req
        .app_data::<web::Data<Arc<dyn TokenService>>>()
        .ok_or_else(|| AppError::Internal("TokenService not found in app data".to_string()))?;

    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuth)?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| AuthError::InvalidToken("Invalid authorization header".to_string()))?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AuthError::InvalidToken("Expected Bearer token".to_string()))?;

    let claims = token_service.validate_token(token)?;
    Ok(Identity::from(claims))
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

/// Role a route demands, checked by [`Authorized`].
pub trait RequiredRole {
    const ROLE: Role;
}

pub struct AdminRole;

impl RequiredRole for AdminRole {
    const ROLE: Role = Role::Admin;
}

pub struct UserRole;

impl RequiredRole for UserRole {
    const ROLE: Role = Role::User;
}

/// Identity that already passed the role check for `R`.
///
/// Extracted before the body and path, so a wrong role answers 403 ahead of
/// any input validation.
pub struct Authorized<R> {
    pub identity: Identity,
    _role: PhantomData<R>,
}

pub type AdminIdentity = Authorized<AdminRole>;
pub type UserIdentity = Authorized<UserRole>;

impl<R: RequiredRole> FromRequest for Authorized<R> {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = authenticate(req).and_then(|identity| {
            identity.require_role(R::ROLE)?;
            Ok(Self {
                identity,
                _role: PhantomData,
            })
        });
        ready(result)
    }
}
