use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Session {
    #[sea_orm(iden = "sessions")]
    Table,
    Token,
}

// The join token arrived after the first deploy, so it is a nullable
// column bolted onto the existing table rather than part of the create.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.alter_table(
            Table::alter()
                .table(Session::Table)
                .add_column(ColumnDef::new(Session::Token).string_len(60).null())
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("uq_sessions_token")
                .table(Session::Table)
                .col(Session::Token)
                .unique()
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_index(
            Index::drop()
                .name("uq_sessions_token")
                .table(Session::Table)
                .to_owned(),
        )
        .await?;

        m.alter_table(
            Table::alter()
                .table(Session::Table)
                .drop_column(Session::Token)
                .to_owned(),
        )
        .await
    }
}
