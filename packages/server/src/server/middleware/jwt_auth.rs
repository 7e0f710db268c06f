//! JWT identity context
//!
//! Account authentication is an external collaborator; this middleware only
//! verifies the token it issued and supplies the acting member's id and
//! role to the handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::{middleware::Next, response::Response};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::common::auth::{Actor, Role};
use crate::common::MemberId;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Member id
    pub sub: Uuid,
    /// Platform role ('staff', 'brand', 'creator')
    pub role: String,
    /// Expiry (unix seconds)
    pub exp: i64,
}

/// Token issue/verify service
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn create_token(&self, member_id: MemberId, role: Role) -> anyhow::Result<String> {
        let claims = Claims {
            sub: member_id.into_uuid(),
            role: role.to_string(),
            exp: (chrono::Utc::now() + chrono::Duration::hours(24)).timestamp(),
        };
        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }

    pub fn verify_token(&self, token: &str) -> anyhow::Result<Claims> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())?;
        Ok(data.claims)
    }
}

/// Authenticated member information from JWT
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub member_id: MemberId,
    pub role: Role,
}

impl AuthUser {
    pub fn actor(&self) -> Actor {
        Actor::new(self.member_id, self.role)
    }
}

/// Rejects with 401 when no valid token was presented.
#[async_trait::async_trait]
impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}

/// JWT authentication middleware
///
/// Extracts the bearer token, verifies it, and adds AuthUser to request
/// extensions. Requests without a valid token continue unauthenticated;
/// handlers that need an actor reject them with 401.
pub async fn jwt_auth_middleware(
    jwt_service: Arc<JwtService>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    if let Some(user) = extract_auth_user(&request, &jwt_service) {
        debug!("Authenticated member: {} ({})", user.member_id, user.role);
        request.extensions_mut().insert(user);
    } else {
        debug!("No valid authentication token");
    }

    next.run(request).await
}

/// Extract and verify the JWT token from a request
fn extract_auth_user(
    request: &axum::http::Request<axum::body::Body>,
    jwt_service: &JwtService,
) -> Option<AuthUser> {
    let auth_header = request.headers().get("authorization")?;
    let auth_str = auth_header.to_str().ok()?;
    let token = auth_str.strip_prefix("Bearer ").unwrap_or(auth_str);

    let claims = jwt_service.verify_token(token).ok()?;
    let role = claims.role.parse::<Role>().ok()?;

    Some(AuthUser {
        member_id: MemberId::from_uuid(claims.sub),
        role,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trips() {
        let service = JwtService::new("test_secret");
        let member_id = MemberId::new();
        let token = service.create_token(member_id, Role::Brand).unwrap();

        let claims = service.verify_token(&token).unwrap();
        assert_eq!(claims.sub, member_id.into_uuid());
        assert_eq!(claims.role, "brand");
    }

    #[test]
    fn extracts_bearer_token() {
        let service = JwtService::new("test_secret");
        let member_id = MemberId::new();
        let token = service.create_token(member_id, Role::Staff).unwrap();

        let request = axum::http::Request::builder()
            .header("authorization", format!("Bearer {}", token))
            .body(axum::body::Body::empty())
            .unwrap();

        let user = extract_auth_user(&request, &service).unwrap();
        assert_eq!(user.member_id, member_id);
        assert_eq!(user.role, Role::Staff);
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let service = JwtService::new("test_secret");
        let other = JwtService::new("other_secret");
        let token = other.create_token(MemberId::new(), Role::Staff).unwrap();

        let request = axum::http::Request::builder()
            .header("authorization", format!("Bearer {}", token))
            .body(axum::body::Body::empty())
            .unwrap();

        assert!(extract_auth_user(&request, &service).is_none());
    }
}
