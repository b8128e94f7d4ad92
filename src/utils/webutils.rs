use actix_web_httpauth::extractors::bearer::BearerAuth;
use uuid::Uuid;

use crate::config::config;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;

/// Resolves the presented bearer token to its user. The token's row id
/// comes back too so logout can revoke exactly this token.
pub async fn current_user(
    db: &PostgresService,
    auth: &BearerAuth,
) -> Result<(entity::user::Model, Uuid), AppError> {
    db.authenticate(auth.token()).await
}

pub fn require_admin(auth: &BearerAuth) -> Result<(), AppError> {
    if auth.token() == config().admin_key {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}
