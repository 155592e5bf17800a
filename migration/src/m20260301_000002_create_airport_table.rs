use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Airport::Table)
                    .if_not_exists()
                    .col(pk_auto(Airport::Id))
                    .col(string(Airport::Name))
                    .col(string(Airport::ClosestBigCity))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Airport::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Airport {
    Table,
    Id,
    Name,
    ClosestBigCity,
}
