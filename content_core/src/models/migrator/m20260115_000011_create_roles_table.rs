use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Role::Table)
                    .col(pk_uuid(Role::Id))
                    .col(string(Role::Name))
                    .col(boolean(Role::IsCustom).default(false).to_owned())
                    .col(string(Role::Description))
                    .col(timestamp_with_time_zone(Role::CreationDate))
                    .col(timestamp_with_time_zone_null(Role::DeletionDate))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Role::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Role {
    Table,
    Id,
    Name,
    IsCustom,
    Description,
    CreationDate,
    DeletionDate,
}
