//! Cookie-based authentication extractors.

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures::future::LocalBoxFuture;
use std::sync::Arc;

use quill_core::ports::{AuthError, RevocationStore, TokenClaims, TokenService};

/// Name of the cookie carrying the session token.
pub const TOKEN_COOKIE: &str = "token";

/// Authenticated user identity extractor.
///
/// Use this in handlers to require a verified session:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, {}!", identity.username)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: uuid::Uuid,
    pub username: String,
    /// The token's `jti`, used when revoking the session at logout.
    pub token_id: String,
    /// The token's expiry, unix timestamp.
    pub expires_at: i64,
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.user_id,
            username: claims.username,
            token_id: claims.token_id,
            expires_at: claims.expires_at,
        }
    }
}

/// Error type for authentication failures.
#[derive(Debug)]
pub struct AuthenticationError(pub AuthError);

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl actix_web::ResponseError for AuthenticationError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match &self.0 {
            AuthError::TokenExpired
            | AuthError::InvalidToken(_)
            | AuthError::TokenRevoked
            | AuthError::MissingAuth => actix_web::http::StatusCode::UNAUTHORIZED,
            _ => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        use quill_shared::ErrorResponse;

        let error = match &self.0 {
            AuthError::TokenExpired => ErrorResponse::new(401, "Token Expired")
                .with_detail("Your session has expired. Please login again."),
            AuthError::TokenRevoked => ErrorResponse::new(401, "Token Revoked")
                .with_detail("This session has been logged out. Please login again."),
            AuthError::InvalidToken(msg) => {
                ErrorResponse::new(401, "Invalid Token").with_detail(msg.clone())
            }
            AuthError::MissingAuth => ErrorResponse::new(401, "Authentication Required")
                .with_detail("Please login to obtain a session cookie."),
            _ => ErrorResponse::internal_error(),
        };

        actix_web::HttpResponse::build(self.status_code()).json(error)
    }
}

impl FromRequest for Identity {
    type Error = AuthenticationError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let token_service = req
                .app_data::<web::Data<Arc<dyn TokenService>>>()
                .cloned()
                .ok_or_else(|| {
                    tracing::error!("TokenService not found in app data");
                    AuthenticationError(AuthError::InvalidToken(
                        "Server configuration error".to_string(),
                    ))
                })?;
            let revocations = req
                .app_data::<web::Data<Arc<dyn RevocationStore>>>()
                .cloned()
                .ok_or_else(|| {
                    tracing::error!("RevocationStore not found in app data");
                    AuthenticationError(AuthError::InvalidToken(
                        "Server configuration error".to_string(),
                    ))
                })?;

            let cookie = req
                .cookie(TOKEN_COOKIE)
                .ok_or(AuthenticationError(AuthError::MissingAuth))?;

            let claims = token_service
                .validate_token(cookie.value())
                .map_err(AuthenticationError)?;

            if revocations.is_revoked(&claims.token_id).await {
                return Err(AuthenticationError(AuthError::TokenRevoked));
            }

            Ok(Identity::from(claims))
        })
    }
}

/// Optional identity extractor - doesn't fail if not authenticated.
pub struct OptionalIdentity(pub Option<Identity>);

impl FromRequest for OptionalIdentity {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Identity::from_request(req, payload);
        Box::pin(async move { Ok(OptionalIdentity(fut.await.ok())) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::test::TestRequest;
    use quill_infra::{InMemoryRevocationStore, JwtConfig, JwtTokenService};

    fn services() -> (Arc<dyn TokenService>, Arc<dyn RevocationStore>) {
        let tokens = JwtTokenService::new(JwtConfig {
            secret: "test-secret".to_string(),
            expiration_hours: 1,
            issuer: "test".to_string(),
        });
        (Arc::new(tokens), Arc::new(InMemoryRevocationStore::new()))
    }

    #[actix_rt::test]
    async fn test_identity_from_valid_cookie() {
        let (tokens, revocations) = services();
        let user_id = uuid::Uuid::new_v4();
        let token = tokens.generate_token(user_id, "a@example.com").unwrap();

        let req = TestRequest::default()
            .app_data(web::Data::new(tokens))
            .app_data(web::Data::new(revocations))
            .cookie(Cookie::new(TOKEN_COOKIE, token))
            .to_http_request();

        let identity = Identity::from_request(&req, &mut Payload::None)
            .await
            .unwrap();

        assert_eq!(identity.user_id, user_id);
        assert_eq!(identity.username, "a@example.com");
    }

    #[actix_rt::test]
    async fn test_missing_cookie_rejected() {
        let (tokens, revocations) = services();

        let req = TestRequest::default()
            .app_data(web::Data::new(tokens))
            .app_data(web::Data::new(revocations))
            .to_http_request();

        let err = Identity::from_request(&req, &mut Payload::None)
            .await
            .unwrap_err();

        assert!(matches!(err.0, AuthError::MissingAuth));
    }

    #[actix_rt::test]
    async fn test_garbage_token_rejected() {
        let (tokens, revocations) = services();

        let req = TestRequest::default()
            .app_data(web::Data::new(tokens))
            .app_data(web::Data::new(revocations))
            .cookie(Cookie::new(TOKEN_COOKIE, "not-a-jwt"))
            .to_http_request();

        let err = Identity::from_request(&req, &mut Payload::None)
            .await
            .unwrap_err();

        assert!(matches!(err.0, AuthError::InvalidToken(_)));
    }

    #[actix_rt::test]
    async fn test_revoked_token_rejected() {
        let (tokens, revocations) = services();
        let token = tokens
            .generate_token(uuid::Uuid::new_v4(), "a@example.com")
            .unwrap();
        let claims = tokens.validate_token(&token).unwrap();
        revocations.revoke(&claims.token_id, None).await.unwrap();

        let req = TestRequest::default()
            .app_data(web::Data::new(tokens))
            .app_data(web::Data::new(revocations))
            .cookie(Cookie::new(TOKEN_COOKIE, token))
            .to_http_request();

        let err = Identity::from_request(&req, &mut Payload::None)
            .await
            .unwrap_err();

        assert!(matches!(err.0, AuthError::TokenRevoked));
    }
}
