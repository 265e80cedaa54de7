use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SocialLink::Table)
                    .col(pk_uuid(SocialLink::Id))
                    .col(string(SocialLink::Link))
                    .col(string(SocialLink::Label))
                    .col(integer(SocialLink::Order).default(0).to_owned())
                    .col(timestamp_with_time_zone(SocialLink::CreationDate))
                    .col(timestamp_with_time_zone(SocialLink::LastUpdated))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SocialLink::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SocialLink {
    Table,
    Id,
    Link,
    Label,
    Order,
    CreationDate,
    LastUpdated,
}
