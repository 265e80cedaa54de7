use sea_orm_migration::{prelude::*, schema::*};

use super::m20260115_000001_create_users_table::User;
use super::m20260115_000007_create_discussions_table::Discussion;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiscussionEntry::Table)
                    .col(pk_uuid(DiscussionEntry::Id))
                    .col(uuid(DiscussionEntry::DiscussionId))
                    .col(uuid(DiscussionEntry::CreatedBy))
                    .col(string(DiscussionEntry::Text))
                    .col(timestamp_with_time_zone(DiscussionEntry::CreationDate))
                    .col(timestamp_with_time_zone(DiscussionEntry::LastUpdated))
                    .col(timestamp_with_time_zone_null(DiscussionEntry::DeletionDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-discussion-entry-discussion_id")
                            .from(DiscussionEntry::Table, DiscussionEntry::DiscussionId)
                            .to(Discussion::Table, Discussion::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-discussion-entry-created_by")
                            .from(DiscussionEntry::Table, DiscussionEntry::CreatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_discussion_entries_discussion_id")
                    .table(DiscussionEntry::Table)
                    .col(DiscussionEntry::DiscussionId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiscussionEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiscussionEntry {
    Table,
    Id,
    DiscussionId,
    CreatedBy,
    Text,
    CreationDate,
    LastUpdated,
    DeletionDate,
}
