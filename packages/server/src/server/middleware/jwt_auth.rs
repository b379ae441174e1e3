use crate::common::{Actor, AuthError, Role};
use crate::domains::auth::JwtService;
use axum::{middleware::Next, response::Response};
use std::sync::Arc;
use tracing::debug;

/// Outcome of inspecting the `Authorization` header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Authentication {
    /// No header was sent
    Anonymous,
    /// A header was sent but the token did not verify
    Rejected,
    Authenticated(Actor),
}

impl Authentication {
    /// Role gate used by handlers: yields the caller when their role is allowed.
    pub fn require_role(&self, allowed: &[Role]) -> Result<Actor, AuthError> {
        match self {
            Authentication::Anonymous => Err(AuthError::AuthenticationRequired),
            Authentication::Rejected => Err(AuthError::InvalidToken),
            Authentication::Authenticated(actor) => {
                actor.require(allowed)?;
                Ok(*actor)
            }
        }
    }
}

/// JWT authentication middleware
///
/// Verifies the token from the Authorization header and adds an
/// [`Authentication`] to request extensions. Rejection is left to the
/// handlers, so public routes keep working with a stale token.
pub async fn jwt_auth_middleware(
    jwt_service: Arc<JwtService>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let authentication = extract_authentication(&request, &jwt_service);

    match &authentication {
        Authentication::Authenticated(actor) => {
            debug!(user_id = %actor.user_id, role = %actor.role, "Authenticated caller");
        }
        Authentication::Rejected => debug!("Invalid authentication token"),
        Authentication::Anonymous => debug!("No authentication token"),
    }

    request.extensions_mut().insert(authentication);

    next.run(request).await
}

/// Extract and verify JWT token from request
fn extract_authentication(
    request: &axum::http::Request<axum::body::Body>,
    jwt_service: &JwtService,
) -> Authentication {
    let Some(auth_header) = request.headers().get("authorization") else {
        return Authentication::Anonymous;
    };
    let Ok(auth_str) = auth_header.to_str() else {
        return Authentication::Rejected;
    };

    // Extract token (handle both "Bearer <token>" and raw token)
    let token = auth_str.strip_prefix("Bearer ").unwrap_or(auth_str);

    match jwt_service.verify_token(token) {
        Ok(claims) => Authentication::Authenticated(claims.actor()),
        Err(_) => Authentication::Rejected,
    }
}
