use actix_web::{get, web};
use serde::Serialize;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize)]
pub struct Response {
    #[serde(flatten)]
    pub session: entity::session::Model,
    pub users: Vec<entity::user::Model>,
}

/// Public fetch by join token, roster included. Password hashes never
/// serialize (skipped on the entity).
#[get("/sessions/{token}")]
async fn show(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
) -> ApiResult<Response> {
    let join_token = path.into_inner();

    let (session, users) = db.get_session_by_token(&join_token).await?;

    Ok(ApiResponse::Ok(Response { session, users }))
}
