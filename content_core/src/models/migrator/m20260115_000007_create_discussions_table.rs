use sea_orm_migration::{prelude::*, schema::*};

use super::m20260115_000001_create_users_table::User;
use super::m20260115_000002_create_tags_table::Tag;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Discussion::Table)
                    .col(pk_uuid(Discussion::Id))
                    .col(uuid(Discussion::CreatedBy))
                    .col(string(Discussion::Title))
                    .col(string(Discussion::Category))
                    .col(timestamp_with_time_zone(Discussion::CreationDate))
                    .col(timestamp_with_time_zone_null(Discussion::DeletionDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-discussion-created_by")
                            .from(Discussion::Table, Discussion::CreatedBy)
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
                    .name("idx_discussions_created_by")
                    .table(Discussion::Table)
                    .col(Discussion::CreatedBy)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DiscussionTag::Table)
                    .col(uuid(DiscussionTag::DiscussionId))
                    .col(uuid(DiscussionTag::TagId))
                    .primary_key(
                        Index::create()
                            .col(DiscussionTag::DiscussionId)
                            .col(DiscussionTag::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-discussion-tag-discussion_id")
                            .from(DiscussionTag::Table, DiscussionTag::DiscussionId)
                            .to(Discussion::Table, Discussion::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-discussion-tag-tag_id")
                            .from(DiscussionTag::Table, DiscussionTag::TagId)
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
            .drop_table(Table::drop().table(DiscussionTag::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Discussion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Discussion {
    Table,
    Id,
    CreatedBy,
    Title,
    Category,
    CreationDate,
    DeletionDate,
}

#[derive(DeriveIden)]
pub enum DiscussionTag {
    Table,
    DiscussionId,
    TagId,
}
