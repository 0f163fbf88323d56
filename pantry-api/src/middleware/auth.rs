use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use pantry_core::Owner;
use pantry_shared::{BudgetId, UserId};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::{AppState, AuthConfig};

pub const USER_ROLE: &str = "USER";

// ============================================================================
// JWT Claims
// ============================================================================

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserClaims {
    /// User id
    pub sub: String,
    pub budget_id: i64,
    pub role: String,
    pub exp: usize,
}

impl UserClaims {
    pub fn owner(&self) -> Option<Owner> {
        let user_id = self.sub.parse::<i64>().ok()?;
        Some(Owner {
            user_id: UserId(user_id),
            budget_id: BudgetId(self.budget_id),
        })
    }
}

pub fn issue_token(
    auth: &AuthConfig,
    owner: &Owner,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = UserClaims {
        sub: owner.user_id.to_string(),
        budget_id: owner.budget_id.0,
        role: USER_ROLE.to_owned(),
        exp: (Utc::now() + Duration::seconds(auth.expiration as i64)).timestamp() as usize,
    };

    encode(&Header::default(), &claims, &EncodingKey::from_secret(auth.secret.as_bytes()))
}

/// Only `USER` tokens may act on a budget.
fn authorize(claims: &UserClaims) -> Result<Owner, AppError> {
    if claims.role != USER_ROLE {
        return Err(AppError::ForbiddenError(format!(
            "Role {} may not access budgets",
            claims.role
        )));
    }

    claims
        .owner()
        .ok_or_else(|| AppError::AuthenticationError("Invalid token subject".to_string()))
}

// ============================================================================
// User Authentication Middleware
// ============================================================================

pub async fn user_auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::AuthenticationError("Missing bearer token".to_string()))?;

    let token_data = decode::<UserClaims>(
        token,
        &DecodingKey::from_secret(state.auth.secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| {
        tracing::debug!("Rejected token: {}", e);
        AppError::AuthenticationError("Invalid token".to_string())
    })?;

    let owner = authorize(&token_data.claims)?;

    req.extensions_mut().insert(owner);

    Ok(next.run(req).await)
}
