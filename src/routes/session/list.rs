use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::require_admin;

/// Full session listing, admin key only.
#[get("/sessions")]
async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    auth: BearerAuth,
) -> ApiResult<Vec<entity::session::Model>> {
    require_admin(&auth)?;

    let sessions = db.list_sessions().await?;

    Ok(ApiResponse::Ok(sessions))
}
