use sea_orm_migration::prelude::*;

mod m20260115_000001_create_users_table;
mod m20260115_000002_create_tags_table;
mod m20260115_000003_create_formats_table;
mod m20260115_000004_create_topics_table;
mod m20260115_000005_create_locations_table;
mod m20260115_000006_create_resources_table;
mod m20260115_000007_create_discussions_table;
mod m20260115_000008_create_discussion_entries_table;
mod m20260115_000009_create_faqs_table;
mod m20260115_000010_create_images_table;
mod m20260115_000011_create_roles_table;
mod m20260115_000012_create_social_links_table;
mod m20260115_000013_create_tasks_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_create_users_table::Migration),
            Box::new(m20260115_000002_create_tags_table::Migration),
            Box::new(m20260115_000003_create_formats_table::Migration),
            Box::new(m20260115_000004_create_topics_table::Migration),
            Box::new(m20260115_000005_create_locations_table::Migration),
            Box::new(m20260115_000006_create_resources_table::Migration),
            Box::new(m20260115_000007_create_discussions_table::Migration),
            Box::new(m20260115_000008_create_discussion_entries_table::Migration),
            Box::new(m20260115_000009_create_faqs_table::Migration),
            Box::new(m20260115_000010_create_images_table::Migration),
            Box::new(m20260115_000011_create_roles_table::Migration),
            Box::new(m20260115_000012_create_social_links_table::Migration),
            Box::new(m20260115_000013_create_tasks_table::Migration),
        ]
    }
}

#[cfg(test)]
use sea_orm::{Database, DbErr};

#[tokio::test]
async fn test_migrations_okay() -> Result<(), DbErr> {
    let db = Database::connect("sqlite:file::memory:?cache=shared").await?;
    let schema_manager = SchemaManager::new(&db);

    Migrator::refresh(&db).await?;

    assert!(schema_manager.has_table("user").await?);
    assert!(schema_manager.has_table("tag").await?);
    assert!(schema_manager.has_table("format").await?);
    assert!(schema_manager.has_table("topic").await?);
    assert!(schema_manager.has_table("topic_format").await?);
    assert!(schema_manager.has_table("location").await?);
    assert!(schema_manager.has_table("resource").await?);
    assert!(schema_manager.has_table("resource_tag").await?);
    assert!(schema_manager.has_table("resource_topic").await?);
    assert!(schema_manager.has_table("discussion").await?);
    assert!(schema_manager.has_table("discussion_tag").await?);
    assert!(schema_manager.has_table("discussion_entry").await?);
    assert!(schema_manager.has_table("faq").await?);
    assert!(schema_manager.has_table("image").await?);
    assert!(schema_manager.has_table("role").await?);
    assert!(schema_manager.has_table("social_link").await?);
    assert!(schema_manager.has_table("task").await?);
    assert!(schema_manager.has_table("task_tag").await?);

    Ok(())
}
