use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Session {
    #[sea_orm(iden = "sessions")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Invitation {
    #[sea_orm(iden = "invitations")]
    Table,
    Token,
    SessionId,
    Accepted,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SessionUser {
    #[sea_orm(iden = "session_user")]
    Table,
    SessionId,
    UserId,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Invitation::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Invitation::Token)
                        .string()
                        .not_null()
                        .primary_key(),
                )
                .col(ColumnDef::new(Invitation::SessionId).uuid().not_null())
                .col(
                    ColumnDef::new(Invitation::Accepted)
                        .boolean()
                        .not_null()
                        .default(false),
                )
                .col(
                    ColumnDef::new(Invitation::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(Invitation::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_invitations_session")
                        .from(Invitation::Table, Invitation::SessionId)
                        .to(Session::Table, Session::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        // Roster join table with join timestamps.
        m.create_table(
            Table::create()
                .table(SessionUser::Table)
                .if_not_exists()
                .col(ColumnDef::new(SessionUser::SessionId).uuid().not_null())
                .col(ColumnDef::new(SessionUser::UserId).uuid().not_null())
                .col(
                    ColumnDef::new(SessionUser::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(SessionUser::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .primary_key(
                    Index::create()
                        .name("pk_session_user")
                        .col(SessionUser::SessionId)
                        .col(SessionUser::UserId),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_session_user_session")
                        .from(SessionUser::Table, SessionUser::SessionId)
                        .to(Session::Table, Session::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_session_user_user")
                        .from(SessionUser::Table, SessionUser::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_session_user_user")
                .table(SessionUser::Table)
                .col(SessionUser::UserId)
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(SessionUser::Table).to_owned())
            .await?;
        m.drop_table(Table::drop().table(Invitation::Table).to_owned())
            .await
    }
}
