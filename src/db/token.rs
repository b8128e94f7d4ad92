use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::token;
use chrono::Utc;
use entity::access_token::{ActiveModel as TokenActive, Entity as AccessToken};
use entity::user::{Entity as User, Model as UserModel};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use uuid::Uuid;

impl PostgresService {
    /// Mints a fresh bearer token for the user. The plaintext secret
    /// leaves this function exactly once; only its hash is persisted.
    pub async fn issue_token(&self, user_id: Uuid, name: &str) -> Result<String, AppError> {
        let secret = token::new_token();
        let hash = token::encrypt(&secret)
            .map_err(|e| AppError::Internal(format!("failed to hash token secret: {e}")))?;
        let id = token::new_id();

        AccessToken::insert(TokenActive {
            id: Set(id),
            user_id: Set(user_id),
            name: Set(name.to_owned()),
            token_hash: Set(hash),
            created_at: Set(Utc::now()),
            last_used_at: Set(None),
        })
        .exec(&self.database_connection)
        .await?;

        Ok(token::construct_token(&id, &secret))
    }

    /// Resolves a presented bearer credential to (user, token row id).
    /// Every failure mode collapses into the same 401.
    pub async fn authenticate(&self, bearer: &str) -> Result<(UserModel, Uuid), AppError> {
        let unauthorized = || AppError::Unauthorized("User not authenticated".to_string());

        let (token_id, secret) = token::extract_token_parts(bearer).ok_or_else(unauthorized)?;

        let row = AccessToken::find_by_id(token_id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(unauthorized)?;

        if !token::verify(&secret, &row.token_hash).unwrap_or(false) {
            return Err(unauthorized());
        }

        let user = User::find_by_id(row.user_id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(unauthorized)?;

        let mut am: TokenActive = row.into();
        am.last_used_at = Set(Some(Utc::now()));
        am.update(&self.database_connection).await?;

        Ok((user, token_id))
    }

    /// Deletes one token row. Other tokens of the same user stay valid.
    pub async fn revoke_token(&self, token_id: Uuid) -> Result<(), AppError> {
        AccessToken::delete_by_id(token_id)
            .exec(&self.database_connection)
            .await?;
        Ok(())
    }
}
