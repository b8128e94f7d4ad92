use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::token;
use chrono::{DateTime, Utc};
use entity::invitation::{ActiveModel as InvitationActive, Entity as Invitation};
use entity::session_user::{ActiveModel as SessionUserActive, Entity as SessionUser};
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait};
use uuid::Uuid;

impl PostgresService {
    pub async fn create_invitation(&self, session_id: Uuid) -> Result<String, AppError> {
        let invite = token::invite_token();
        let now = Utc::now();
        Invitation::insert(InvitationActive {
            token: Set(invite.clone()),
            session_id: Set(session_id),
            accepted: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&self.database_connection)
        .await?;
        Ok(invite)
    }

    pub async fn get_invitation(
        &self,
        invite_token: &str,
    ) -> Result<Option<entity::invitation::Model>, AppError> {
        Ok(Invitation::find_by_id(invite_token.to_owned())
            .one(&self.database_connection)
            .await?)
    }

    /// Redeems an invitation and attaches the user to the session roster.
    ///
    /// The accepted flag is flipped by a single conditional UPDATE, so two
    /// concurrent joins on the same token cannot both pass: the second one
    /// affects zero rows and the membership insert never runs for it.
    pub async fn join_session(
        &self,
        invite_token: &str,
        user_id: Uuid,
    ) -> Result<(Uuid, DateTime<Utc>), AppError> {
        let invalid = || {
            AppError::NotFound("Invalid or already used invitation token".to_string())
        };

        let txn = self.database_connection.begin().await?;

        let invitation = Invitation::find_by_id(invite_token.to_owned())
            .one(&txn)
            .await?
            .ok_or_else(invalid)?;

        let now = Utc::now();
        let res = Invitation::update_many()
            .col_expr(entity::invitation::Column::Accepted, Expr::value(true))
            .col_expr(entity::invitation::Column::UpdatedAt, Expr::value(now))
            .filter(entity::invitation::Column::Token.eq(invite_token))
            .filter(entity::invitation::Column::Accepted.eq(false))
            .exec(&txn)
            .await?;

        if res.rows_affected == 0 {
            txn.rollback().await?;
            return Err(invalid());
        }

        SessionUser::insert(SessionUserActive {
            session_id: Set(invitation.session_id),
            user_id: Set(user_id),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&txn)
        .await?;

        txn.commit().await?;
        Ok((invitation.session_id, now))
    }
}
