use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::SessionSummary;
use crate::utils::webutils::current_user;

/// Sessions the caller is a member of but does not run.
#[get("/sessions/invited")]
async fn invited_sessions(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    auth: BearerAuth,
) -> ApiResult<Vec<SessionSummary>> {
    let (user, _token_id) = current_user(&db, &auth).await?;

    let sessions = db.list_invited_sessions(user.id).await?;

    Ok(ApiResponse::Ok(sessions))
}
