use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::RJoinSession;
use crate::utils::webutils::current_user;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Redeems an invitation token from the body and attaches the caller
/// to the session roster. The accept-then-attach sequence is a single
/// transaction in the db layer, so a half-joined state cannot leak.
#[post("/sessions/join")]
async fn join(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RJoinSession>,
    auth: Option<BearerAuth>,
) -> ApiResult<Response> {
    info!("join session called");

    let Some(auth) = auth else {
        warn!("join attempted without credentials");
        return Err(AppError::Unauthorized("User not authenticated".to_string()));
    };
    // Bad credentials already come back as the right 401 from the db
    // layer; anything else (e.g. a dead database) must stay a 500.
    let (user, _token_id) = current_user(&db, &auth).await?;

    let Some(session_token) = body.session_token.as_deref() else {
        warn!("join attempted without a session_token");
        return Err(AppError::NotFound(
            "Invalid or already used invitation token".to_string(),
        ));
    };

    let (session_id, joined_at) = db.join_session(session_token, user.id).await?;

    info!("user {} joined session {}", user.id, session_id);

    Ok(ApiResponse::Ok(Response {
        message: "You have joined the session!".to_string(),
        session_id,
        created_at: joined_at,
        updated_at: joined_at,
    }))
}
