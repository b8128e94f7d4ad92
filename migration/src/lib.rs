pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_users_table;
mod m20240301_000002_create_sessions_table;
mod m20240310_000001_create_invitations_table;
mod m20240402_000001_create_items_tables;
mod m20240501_000001_create_access_tokens_table;
mod m20240514_233402_add_token_to_sessions;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_users_table::Migration),
            Box::new(m20240301_000002_create_sessions_table::Migration),
            Box::new(m20240310_000001_create_invitations_table::Migration),
            Box::new(m20240402_000001_create_items_tables::Migration),
            Box::new(m20240501_000001_create_access_tokens_table::Migration),
            Box::new(m20240514_233402_add_token_to_sessions::Migration),
        ]
    }
}
