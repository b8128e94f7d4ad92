use actix_web::{route, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::session::RSessionUpdate;
use crate::utils::validate::FieldErrors;
use crate::utils::webutils::current_user;

/// Partial update. Field violations come back 400 with the raw errors
/// map; an unknown id is a 404 with a message body.
#[route("/sessions/{id}", method = "PUT", method = "PATCH")]
async fn update(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    body: web::Json<RSessionUpdate>,
    auth: BearerAuth,
) -> Result<HttpResponse, AppError> {
    current_user(&db, &auth).await?;

    let session = db.get_session(path.into_inner()).await?;

    let mut errors = FieldErrors::new();
    if let Some(title) = &body.title {
        if title.chars().count() > 255 {
            errors.push("title", "The title may not be greater than 255 characters.");
        }
    }
    if let Some(game_master_id) = body.game_master_id {
        if !db.user_exists(game_master_id).await? {
            errors.push("game_master_id", "The selected game_master_id is invalid.");
        }
    }
    if !errors.is_empty() {
        return Ok(HttpResponse::BadRequest().json(errors));
    }

    let session = db.update_session(session, body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(session))
}
