use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000003_create_airplane_type_table::AirplaneType;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Airplane::Table)
                    .if_not_exists()
                    .col(pk_auto(Airplane::Id))
                    .col(string(Airplane::Name))
                    .col(integer(Airplane::Rows))
                    .col(integer(Airplane::SeatsInRow))
                    .col(integer(Airplane::AirplaneTypeId))
                    .col(string_null(Airplane::Image))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_airplane_airplane_type_id")
                            .from(Airplane::Table, Airplane::AirplaneTypeId)
                            .to(AirplaneType::Table, AirplaneType::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Airplane::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Airplane {
    Table,
    Id,
    Name,
    Rows,
    SeatsInRow,
    AirplaneTypeId,
    Image,
}
