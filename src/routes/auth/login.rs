use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::RLogin;
use crate::utils::token::verify;
use crate::utils::validate::{is_valid_email, FieldErrors};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub access_token: String,
    pub token_type: String,
    pub user_id: Uuid,
}

#[post("/login")]
async fn login(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RLogin>,
) -> ApiResult<Response> {
    let mut errors = FieldErrors::new();

    let email = body.email.as_deref().unwrap_or("").trim();
    if email.is_empty() {
        errors.push("email", "The email field is required.");
    } else if !is_valid_email(email) {
        errors.push("email", "The email must be a valid email address.");
    }

    let password = body.password.as_deref().unwrap_or("");
    if password.is_empty() {
        errors.push("password", "The password field is required.");
    }

    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    // Unknown email and wrong password are indistinguishable on the wire.
    let invalid = || AppError::Unauthorized("Invalid credentials".to_string());

    let user = match db.get_user_by_email(email).await {
        Ok(user) => user,
        Err(AppError::NotFound(_)) => return Err(invalid()),
        Err(e) => return Err(e),
    };

    match verify(password, &user.password_hash) {
        Ok(true) => {}
        _ => return Err(invalid()),
    }

    let access_token = db.issue_token(user.id, "login").await?;

    Ok(ApiResponse::Ok(Response {
        access_token,
        token_type: "Bearer".to_string(),
        user_id: user.id,
    }))
}
