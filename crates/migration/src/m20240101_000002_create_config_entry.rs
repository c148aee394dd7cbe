use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ConfigEntry::Table)
                    .if_not_exists()
                    .col(string(ConfigEntry::Key).primary_key())
                    .col(text(ConfigEntry::Value).not_null())
                    // stamped by the store on every write
                    .col(string(ConfigEntry::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ConfigEntry::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ConfigEntry {
    Table,
    Key,
    Value,
    UpdatedAt,
}
