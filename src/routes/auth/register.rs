use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RRegister};
use crate::utils::token::encrypt;
use crate::utils::validate::{is_valid_email, FieldErrors};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
    pub token: String,
}

#[post("/register")]
async fn register(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RRegister>,
) -> ApiResult<Response> {
    let mut errors = FieldErrors::new();

    let username = body.username.as_deref().unwrap_or("").trim();
    if username.is_empty() {
        errors.push("username", "The username field is required.");
    } else if username.chars().count() > 255 {
        errors.push(
            "username",
            "The username may not be greater than 255 characters.",
        );
    } else if db.user_exists_by_username(username).await? {
        errors.push("username", "The username has already been taken.");
    }

    let email = body.email.as_deref().unwrap_or("").trim();
    if email.is_empty() {
        errors.push("email", "The email field is required.");
    } else if !is_valid_email(email) {
        errors.push("email", "The email must be a valid email address.");
    } else if db.user_exists_by_email(email).await? {
        errors.push("email", "The email has already been taken.");
    }

    let password = body.password.as_deref().unwrap_or("");
    if password.is_empty() {
        errors.push("password", "The password field is required.");
    } else if password.chars().count() < 8 {
        errors.push("password", "The password must be at least 8 characters.");
    }

    match body.password_confirmation.as_deref() {
        None | Some("") => errors.push(
            "password_confirmation",
            "The password confirmation field is required.",
        ),
        Some(confirmation) if confirmation != password => {
            errors.push("password", "The password confirmation does not match.")
        }
        _ => {}
    }

    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let password_hash = encrypt(password)
        .map_err(|e| AppError::Internal(format!("failed to hash password: {e}")))?;

    let user_id = db
        .create_user(DBUserCreate {
            username: username.to_owned(),
            email: email.to_owned(),
            password_hash,
        })
        .await?;

    let token = db.issue_token(user_id, "register").await?;

    Ok(ApiResponse::Created(Response {
        message: "User registered successfully".to_string(),
        token,
    }))
}
