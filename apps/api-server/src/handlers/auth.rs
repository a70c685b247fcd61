//! Authentication handlers.

use actix_web::{HttpResponse, cookie::Cookie, web};
use std::sync::Arc;
use std::time::Duration;

use quill_core::domain::User;
use quill_core::ports::{PasswordService, RevocationStore, TokenService};
use quill_shared::ApiResponse;
use quill_shared::dto::{LoginRequest, RegisterRequest, SessionUser, UserResponse};

use crate::middleware::auth::{Identity, OptionalIdentity, TOKEN_COOKIE};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;
use crate::validation;

/// POST /register
pub async fn register(
    state: web::Data<AppState>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    validation::validate_credentials(&req.username, &req.password)?;

    // Explicit lookup for a friendly message; the unique constraint is the
    // real guarantee.
    if state.users.find_by_username(&req.username).await?.is_some() {
        return Err(AppError::Duplicate(
            "Username already registered".to_string(),
        ));
    }

    let password_hash = password_service
        .hash(&req.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let user = User::new(req.username, password_hash);
    let user = state.users.insert(user).await?;

    tracing::info!(user_id = %user.id, "Registered new user");

    Ok(HttpResponse::Ok().json(UserResponse {
        id: user.id,
        username: user.username,
        created_at: user.created_at,
    }))
}

/// POST /login
pub async fn login(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    validation::validate_credentials(&req.username, &req.password)?;

    // Unknown user and wrong password answer alike
    let user = state
        .users
        .find_by_username(&req.username)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid credentials".to_string()))?;

    let valid = password_service
        .verify(&req.password, &user.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !valid {
        return Err(AppError::BadRequest("Invalid credentials".to_string()));
    }

    let token = token_service
        .generate_token(user.id, &user.username)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let cookie = Cookie::build(TOKEN_COOKIE, token)
        .path("/")
        .http_only(true)
        .finish();

    Ok(HttpResponse::Ok().cookie(cookie).json(SessionUser {
        id: user.id,
        username: user.username,
    }))
}

/// GET /profile - requires a valid session cookie.
pub async fn profile(identity: Identity) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(SessionUser {
        id: identity.user_id,
        username: identity.username,
    }))
}

/// POST /logout
///
/// Always succeeds. When the request still carries a valid token, its id
/// goes into the revocation set for the token's remaining lifetime.
pub async fn logout(
    identity: OptionalIdentity,
    revocations: web::Data<Arc<dyn RevocationStore>>,
) -> AppResult<HttpResponse> {
    if let OptionalIdentity(Some(identity)) = identity {
        let remaining = identity.expires_at - chrono::Utc::now().timestamp();
        let ttl = (remaining > 0).then(|| Duration::from_secs(remaining as u64));
        revocations.revoke(&identity.token_id, ttl).await?;
        tracing::debug!(user_id = %identity.user_id, "Session revoked");
    }

    let mut cookie = Cookie::new(TOKEN_COOKIE, "");
    cookie.set_path("/");
    cookie.make_removal();

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(ApiResponse::ok_with_message((), "Logged out")))
}
