use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::current_user;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub token: String,
    pub message: String,
}

/// Mints a single-use invitation for a session. Game master only.
#[post("/sessions/{id}/invitations")]
async fn create_invitation(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    auth: BearerAuth,
) -> ApiResult<Response> {
    let (user, _token_id) = current_user(&db, &auth).await?;

    let session = db.get_session(path.into_inner()).await?;
    if session.game_master_id != user.id {
        return Err(AppError::Forbidden);
    }

    let token = db.create_invitation(session.id).await?;

    Ok(ApiResponse::Created(Response {
        token,
        message: "Invitation created.".to_string(),
    }))
}
