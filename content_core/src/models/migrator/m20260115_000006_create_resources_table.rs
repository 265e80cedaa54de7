use sea_orm_migration::{prelude::*, schema::*};

use super::m20260115_000001_create_users_table::User;
use super::m20260115_000002_create_tags_table::Tag;
use super::m20260115_000004_create_topics_table::Topic;
use super::m20260115_000005_create_locations_table::Location;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Resource::Table)
                    .col(pk_uuid(Resource::Id))
                    .col(uuid(Resource::CreatedBy))
                    .col(string(Resource::Name))
                    .col(string(Resource::Description))
                    .col(string(Resource::Category))
                    .col(uuid_uniq(Resource::LocationId))
                    .col(string(Resource::Url))
                    .col(boolean(Resource::IsPrivate).default(true).to_owned())
                    .col(boolean(Resource::TermsChecked).default(false).to_owned())
                    .col(timestamp_with_time_zone(Resource::CreationDate))
                    .col(timestamp_with_time_zone(Resource::LastUpdated))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-resource-created_by")
                            .from(Resource::Table, Resource::CreatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // Restrict: a location cannot be removed out from under
                    // its resource. The resource service deletes the
                    // resource row first, then the location, in one
                    // transaction.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-resource-location_id")
                            .from(Resource::Table, Resource::LocationId)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_resources_created_by")
                    .table(Resource::Table)
                    .col(Resource::CreatedBy)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ResourceTag::Table)
                    .col(uuid(ResourceTag::ResourceId))
                    .col(uuid(ResourceTag::TagId))
                    .primary_key(
                        Index::create()
                            .col(ResourceTag::ResourceId)
                            .col(ResourceTag::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-resource-tag-resource_id")
                            .from(ResourceTag::Table, ResourceTag::ResourceId)
                            .to(Resource::Table, Resource::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-resource-tag-tag_id")
                            .from(ResourceTag::Table, ResourceTag::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ResourceTopic::Table)
                    .col(uuid(ResourceTopic::ResourceId))
                    .col(uuid(ResourceTopic::TopicId))
                    .primary_key(
                        Index::create()
                            .col(ResourceTopic::ResourceId)
                            .col(ResourceTopic::TopicId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-resource-topic-resource_id")
                            .from(ResourceTopic::Table, ResourceTopic::ResourceId)
                            .to(Resource::Table, Resource::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-resource-topic-topic_id")
                            .from(ResourceTopic::Table, ResourceTopic::TopicId)
                            .to(Topic::Table, Topic::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ResourceTopic::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ResourceTag::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Resource::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Resource {
    Table,
    Id,
    CreatedBy,
    Name,
    Description,
    Category,
    LocationId,
    Url,
    IsPrivate,
    TermsChecked,
    CreationDate,
    LastUpdated,
}

#[derive(DeriveIden)]
pub enum ResourceTag {
    Table,
    ResourceId,
    TagId,
}

#[derive(DeriveIden)]
pub enum ResourceTopic {
    Table,
    ResourceId,
    TopicId,
}
