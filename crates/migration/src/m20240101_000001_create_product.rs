use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(string(Product::Id).primary_key())
                    .col(string(Product::Name).not_null())
                    .col(double(Product::Price).not_null())
                    .col(text(Product::Description).not_null())
                    .col(string(Product::Sizes).not_null())
                    .col(string(Product::Image).not_null())
                    // caller-supplied timestamp text, listing sort key
                    .col(string(Product::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Product::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Product {
    Table,
    Id,
    Name,
    Price,
    Description,
    Sizes,
    Image,
    CreatedAt,
}
