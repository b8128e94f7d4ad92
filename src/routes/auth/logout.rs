use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::current_user;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

/// Revokes only the token the request was made with. Other tokens
/// issued to the same user keep working.
#[post("/logout")]
async fn logout(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    auth: BearerAuth,
) -> ApiResult<Response> {
    let (_user, token_id) = current_user(&db, &auth).await?;

    db.revoke_token(token_id).await?;

    Ok(ApiResponse::Ok(Response {
        message: "Logout successful!".to_string(),
    }))
}
