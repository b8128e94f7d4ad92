use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::session::{RSessionUpdate, SessionSummary};
use crate::utils::token;
use chrono::Utc;
use entity::session::{ActiveModel as SessionActive, Entity as Session, Model as SessionModel};
use entity::user::Model as UserModel;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, JoinType, ModelTrait, QueryFilter,
    QuerySelect, RelationTrait, Set,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn create_session(
        &self,
        game_master_id: Uuid,
        title: String,
        description: Option<String>,
    ) -> Result<SessionModel, AppError> {
        let now = Utc::now();
        Ok(SessionActive {
            id: Set(token::new_id()),
            title: Set(title),
            description: Set(description),
            game_master_id: Set(game_master_id),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            token: Set(Some(token::join_token())),
        }
        .insert(&self.database_connection)
        .await?)
    }

    pub async fn get_session(&self, id: Uuid) -> Result<SessionModel, AppError> {
        Ok(Session::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Session not found".into()))?)
    }

    /// Fetch by join token, roster included.
    pub async fn get_session_by_token(
        &self,
        join_token: &str,
    ) -> Result<(SessionModel, Vec<UserModel>), AppError> {
        let session = Session::find()
            .filter(entity::session::Column::Token.eq(join_token))
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Session not found".into()))?;

        let members = session
            .find_related(entity::user::Entity)
            .all(&self.database_connection)
            .await?;

        Ok((session, members))
    }

    pub async fn list_sessions(&self) -> Result<Vec<SessionModel>, AppError> {
        Ok(Session::find().all(&self.database_connection).await?)
    }

    pub async fn list_session_members(&self, session_id: Uuid) -> Result<Vec<UserModel>, AppError> {
        let session = self.get_session(session_id).await?;
        Ok(session
            .find_related(entity::user::Entity)
            .all(&self.database_connection)
            .await?)
    }

    /// Partial update; absent fields are left alone. The join token is
    /// immutable and never touched here.
    pub async fn update_session(
        &self,
        session: SessionModel,
        changes: RSessionUpdate,
    ) -> Result<SessionModel, AppError> {
        let mut am: SessionActive = session.into();
        if let Some(game_master_id) = changes.game_master_id {
            am.game_master_id = Set(game_master_id);
        }
        if let Some(title) = changes.title {
            am.title = Set(title);
        }
        if let Some(description) = changes.description {
            am.description = Set(description);
        }
        if let Some(is_active) = changes.is_active {
            am.is_active = Set(is_active);
        }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }

    pub async fn delete_session(&self, id: Uuid) -> Result<(), AppError> {
        let res = Session::delete_by_id(id)
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("Session not found".to_string()));
        }
        Ok(())
    }

    /// Sessions the user runs as game master.
    pub async fn list_created_sessions(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<SessionSummary>, AppError> {
        Ok(Session::find()
            .select_only()
            .column(entity::session::Column::Title)
            .column(entity::session::Column::Description)
            .column(entity::session::Column::Token)
            .filter(entity::session::Column::GameMasterId.eq(user_id))
            .into_model::<SessionSummary>()
            .all(&self.database_connection)
            .await?)
    }

    /// Sessions the user joined but does not run.
    pub async fn list_invited_sessions(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<SessionSummary>, AppError> {
        Ok(Session::find()
            .select_only()
            .column(entity::session::Column::Title)
            .column(entity::session::Column::Description)
            .column(entity::session::Column::Token)
            .join(
                JoinType::InnerJoin,
                entity::session::Relation::SessionUser.def(),
            )
            .filter(entity::session_user::Column::UserId.eq(user_id))
            .filter(entity::session::Column::GameMasterId.ne(user_id))
            .into_model::<SessionSummary>()
            .all(&self.database_connection)
            .await?)
    }
}
