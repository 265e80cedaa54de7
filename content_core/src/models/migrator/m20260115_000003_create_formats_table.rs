use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Format::Table)
                    .col(pk_uuid(Format::Id))
                    .col(string(Format::Name))
                    .col(timestamp_with_time_zone(Format::CreationDate))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Format::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Format {
    Table,
    Id,
    Name,
    CreationDate,
}
