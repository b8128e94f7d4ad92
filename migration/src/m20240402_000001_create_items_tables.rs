use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Item {
    #[sea_orm(iden = "items")]
    Table,
    Id,
    Title,
    Description,
    Price,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ShopItem {
    #[sea_orm(iden = "shop_items")]
    Table,
    Id,
    ItemId,
    Price,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Item::Table)
                .if_not_exists()
                .col(ColumnDef::new(Item::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Item::Title).string_len(255).not_null())
                .col(ColumnDef::new(Item::Description).text().null())
                .col(ColumnDef::new(Item::Price).double().not_null())
                .col(
                    ColumnDef::new(Item::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(Item::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .to_owned(),
        )
        .await?;

        m.create_table(
            Table::create()
                .table(ShopItem::Table)
                .if_not_exists()
                .col(ColumnDef::new(ShopItem::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(ShopItem::ItemId).uuid().not_null())
                .col(ColumnDef::new(ShopItem::Price).double().not_null())
                .col(
                    ColumnDef::new(ShopItem::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(ShopItem::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_shop_items_item")
                        .from(ShopItem::Table, ShopItem::ItemId)
                        .to(Item::Table, Item::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(ShopItem::Table).to_owned())
            .await?;
        m.drop_table(Table::drop().table(Item::Table).to_owned()).await
    }
}
