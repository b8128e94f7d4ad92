use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub game_master_id: Uuid, // FK -> users.id
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    // 60-char join token; column is nullable because it was added after
    // the first deploy, but the application always fills it at creation.
    pub token: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::GameMasterId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    GameMaster,

    #[sea_orm(has_many = "super::invitation::Entity")]
    Invitation,

    #[sea_orm(has_many = "super::session_user::Entity")]
    SessionUser,
}

impl Related<super::invitation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invitation.def()
    }
}

// Member roster via session_user.
impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::session_user::Relation::User.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::session_user::Relation::Session.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
