use sea_orm_migration::{prelude::*, schema::*};

use super::m20260115_000002_create_tags_table::Tag;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Task::Table)
                    .col(pk_uuid(Task::Id))
                    .col(string(Task::Name))
                    .col(string(Task::Description))
                    .col(timestamp_with_time_zone(Task::CreationDate))
                    .col(timestamp_with_time_zone(Task::LastUpdated))
                    .col(timestamp_with_time_zone_null(Task::DeletionDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TaskTag::Table)
                    .col(uuid(TaskTag::TaskId))
                    .col(uuid(TaskTag::TagId))
                    .primary_key(Index::create().col(TaskTag::TaskId).col(TaskTag::TagId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-task-tag-task_id")
                            .from(TaskTag::Table, TaskTag::TaskId)
                            .to(Task::Table, Task::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-task-tag-tag_id")
                            .from(TaskTag::Table, TaskTag::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TaskTag::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Task::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Task {
    Table,
    Id,
    Name,
    Description,
    CreationDate,
    LastUpdated,
    DeletionDate,
}

#[derive(DeriveIden)]
pub enum TaskTag {
    Table,
    TaskId,
    TagId,
}
