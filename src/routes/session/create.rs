use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::RSessionCreate;
use crate::utils::validate::FieldErrors;
use crate::utils::webutils::current_user;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
    pub session: entity::session::Model,
    pub session_id: Uuid,
}

#[post("/sessions")]
async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RSessionCreate>,
    auth: BearerAuth,
) -> ApiResult<Response> {
    let (user, _token_id) = current_user(&db, &auth).await?;

    let mut errors = FieldErrors::new();
    let title = body.title.as_deref().unwrap_or("").trim();
    if title.is_empty() {
        errors.push("title", "The title field is required.");
    } else if title.chars().count() > 255 {
        errors.push("title", "The title may not be greater than 255 characters.");
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let session = db
        .create_session(user.id, title.to_owned(), body.description.clone())
        .await?;
    let session_id = session.id;

    Ok(ApiResponse::Created(Response {
        message: "Session created successfully!".to_string(),
        session,
        session_id,
    }))
}
