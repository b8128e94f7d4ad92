use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::SessionSummary;
use crate::utils::webutils::current_user;

/// Sessions the caller runs as game master.
#[get("/sessions/mine")]
async fn created_sessions(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    auth: BearerAuth,
) -> ApiResult<Vec<SessionSummary>> {
    let (user, _token_id) = current_user(&db, &auth).await?;

    let sessions = db.list_created_sessions(user.id).await?;

    Ok(ApiResponse::Ok(sessions))
}
