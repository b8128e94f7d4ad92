use actix_web::{delete, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::current_user;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

#[delete("/sessions/{id}")]
async fn delete(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    auth: BearerAuth,
) -> ApiResult<Response> {
    current_user(&db, &auth).await?;

    db.delete_session(path.into_inner()).await?;

    Ok(ApiResponse::Ok(Response {
        message: "Session deleted".to_string(),
    }))
}
