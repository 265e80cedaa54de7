use sea_orm_migration::{prelude::*, schema::*};

use super::m20260115_000003_create_formats_table::Format;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Topic::Table)
                    .col(pk_uuid(Topic::Id))
                    .col(string(Topic::Name))
                    .col(boolean(Topic::Active).default(true).to_owned())
                    .col(string(Topic::Description))
                    .col(timestamp_with_time_zone(Topic::CreationDate))
                    .col(timestamp_with_time_zone(Topic::LastUpdated))
                    .col(timestamp_with_time_zone_null(Topic::DeprecationDate))
                    .to_owned(),
            )
            .await?;

        // Bridge to the external format entity; both sides cascade.
        manager
            .create_table(
                Table::create()
                    .table(TopicFormat::Table)
                    .col(uuid(TopicFormat::TopicId))
                    .col(uuid(TopicFormat::FormatId))
                    .primary_key(
                        Index::create()
                            .col(TopicFormat::TopicId)
                            .col(TopicFormat::FormatId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-topic-format-topic_id")
                            .from(TopicFormat::Table, TopicFormat::TopicId)
                            .to(Topic::Table, Topic::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-topic-format-format_id")
                            .from(TopicFormat::Table, TopicFormat::FormatId)
                            .to(Format::Table, Format::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TopicFormat::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Topic::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Topic {
    Table,
    Id,
    Name,
    Active,
    Description,
    CreationDate,
    LastUpdated,
    DeprecationDate,
}

#[derive(DeriveIden)]
pub enum TopicFormat {
    Table,
    TopicId,
    FormatId,
}
