use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, Set,
};
use thiserror::Error;

use crate::entity::prelude::{
    Discussion, DiscussionActiveModel, DiscussionEntry, DiscussionEntryActiveModel,
    DiscussionEntryModel, DiscussionModel, DiscussionTagActiveModel,
};
use crate::ids::{DiscussionEntryId, DiscussionId, TagId, UserId};

#[derive(Debug, Error)]
pub enum DiscussionsServiceError {
    #[error("fatal database error")]
    Db(#[from] DbErr),
    #[error("discussion {0} not found")]
    NotFound(DiscussionId),
}

#[derive(Clone)]
pub struct DiscussionsService {
    db: DatabaseConnection,
}

impl DiscussionsService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_discussion(
        &self,
        created_by: UserId,
        title: String,
        category: String,
    ) -> Result<DiscussionModel, DiscussionsServiceError> {
        let discussion = DiscussionActiveModel {
            id: Set(DiscussionId::new()),
            created_by: Set(created_by),
            title: Set(title),
            category: Set(category),
            creation_date: Set(Utc::now()),
            deletion_date: Set(None),
        };
        Ok(discussion.insert(&self.db).await?)
    }

    pub async fn get_discussion(
        &self,
        id: DiscussionId,
    ) -> Result<Option<DiscussionModel>, DiscussionsServiceError> {
        Ok(Discussion::find_by_id(id).one(&self.db).await?)
    }

    pub async fn add_entry(
        &self,
        discussion_id: DiscussionId,
        created_by: UserId,
        text: String,
    ) -> Result<DiscussionEntryModel, DiscussionsServiceError> {
        let now = Utc::now();
        let entry = DiscussionEntryActiveModel {
            id: Set(DiscussionEntryId::new()),
            discussion_id: Set(discussion_id),
            created_by: Set(created_by),
            text: Set(text),
            creation_date: Set(now),
            last_updated: Set(now),
            deletion_date: Set(None),
        };
        Ok(entry.insert(&self.db).await?)
    }

    pub async fn entries(
        &self,
        discussion: &DiscussionModel,
    ) -> Result<Vec<DiscussionEntryModel>, DiscussionsServiceError> {
        Ok(discussion.find_related(DiscussionEntry).all(&self.db).await?)
    }

    pub async fn attach_tag(
        &self,
        discussion_id: DiscussionId,
        tag_id: TagId,
    ) -> Result<(), DiscussionsServiceError> {
        DiscussionTagActiveModel {
            discussion_id: Set(discussion_id),
            tag_id: Set(tag_id),
        }
        .insert(&self.db)
        .await?;
        Ok(())
    }

    /// Mark a discussion deleted by stamping `deletion_date`. The row stays
    /// in place; a timestamp already present is left untouched.
    pub async fn soft_delete_discussion(
        &self,
        id: DiscussionId,
    ) -> Result<DiscussionModel, DiscussionsServiceError> {
        let discussion = Discussion::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DiscussionsServiceError::NotFound(id))?;

        if discussion.deletion_date.is_some() {
            return Ok(discussion);
        }

        let mut active: DiscussionActiveModel = discussion.into();
        active.deletion_date = Set(Some(Utc::now()));
        Ok(active.update(&self.db).await?)
    }

    /// Permanently remove a discussion. Its entries and tag attachments go
    /// with it through the declared foreign-key cascades.
    pub async fn delete_discussion(&self, id: DiscussionId) -> Result<(), DiscussionsServiceError> {
        Discussion::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DiscussionsServiceError::NotFound(id))?;

        Discussion::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::prelude::*;
    use crate::lifecycle::{Lifecycle, SoftDeletable};
    use crate::models::migrator::Migrator;
    use sea_orm::Database;
    use sea_orm_migration::MigratorTrait;

    async fn setup() -> (DiscussionsService, DatabaseConnection, UserId) {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory database");
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        let user_id = UserId::new();
        UserActiveModel {
            id: Set(user_id),
            username: Set("author".to_string()),
            creation_date: Set(Utc::now()),
        }
        .insert(&db)
        .await
        .unwrap();

        (DiscussionsService::new(db.clone()), db, user_id)
    }

    #[tokio::test]
    async fn test_create_and_find_discussion() {
        let (discussions, _db, user_id) = setup().await;

        let created = discussions
            .create_discussion(user_id, "Organizing 101".to_string(), "general".to_string())
            .await
            .unwrap();

        let found = discussions.get_discussion(created.id).await.unwrap();
        assert_eq!(found, Some(created.clone()));
        assert!(created.is_active());
    }

    #[tokio::test]
    async fn test_entries_belong_to_their_discussion() {
        let (discussions, _db, user_id) = setup().await;

        let discussion = discussions
            .create_discussion(user_id, "Thread".to_string(), "".to_string())
            .await
            .unwrap();

        for i in 0..3 {
            discussions
                .add_entry(discussion.id, user_id, format!("entry {i}"))
                .await
                .unwrap();
        }

        let entries = discussions.entries(&discussion).await.unwrap();
        assert_eq!(entries.len(), 3);
    }

    #[tokio::test]
    async fn test_soft_delete_sets_timestamp_once() {
        let (discussions, _db, user_id) = setup().await;

        let discussion = discussions
            .create_discussion(user_id, "Ephemeral".to_string(), "".to_string())
            .await
            .unwrap();

        let deleted = discussions
            .soft_delete_discussion(discussion.id)
            .await
            .unwrap();
        let stamped_at = match deleted.lifecycle() {
            Lifecycle::SoftDeleted(at) => at,
            Lifecycle::Active => panic!("should be soft deleted"),
        };

        // A second soft delete leaves the original timestamp alone.
        let again = discussions
            .soft_delete_discussion(discussion.id)
            .await
            .unwrap();
        assert_eq!(again.deletion_date, Some(stamped_at));

        // The row is still readable.
        let found = discussions.get_discussion(discussion.id).await.unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn test_hard_delete_cascades_to_entries() {
        let (discussions, db, user_id) = setup().await;

        let discussion = discussions
            .create_discussion(user_id, "Doomed".to_string(), "".to_string())
            .await
            .unwrap();

        for _ in 0..2 {
            discussions
                .add_entry(discussion.id, user_id, "text".to_string())
                .await
                .unwrap();
        }

        discussions.delete_discussion(discussion.id).await.unwrap();

        let remaining = DiscussionEntry::find()
            .filter(DiscussionEntryColumn::DiscussionId.eq(discussion.id))
            .all(&db)
            .await
            .unwrap();
        assert!(remaining.is_empty(), "entries should cascade away");
    }

    #[tokio::test]
    async fn test_hard_delete_of_unknown_discussion_reports_not_found() {
        let (discussions, _db, _user_id) = setup().await;

        let result = discussions.delete_discussion(DiscussionId::new()).await;
        assert!(matches!(
            result,
            Err(DiscussionsServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_hard_delete_cleans_tag_attachments() {
        let (discussions, db, user_id) = setup().await;

        let tag_id = TagId::new();
        TagActiveModel {
            id: Set(tag_id),
            text: Set("tag".to_string()),
            description: Set("".to_string()),
            creation_date: Set(Utc::now()),
        }
        .insert(&db)
        .await
        .unwrap();

        let discussion = discussions
            .create_discussion(user_id, "Tagged".to_string(), "".to_string())
            .await
            .unwrap();
        discussions.attach_tag(discussion.id, tag_id).await.unwrap();

        discussions.delete_discussion(discussion.id).await.unwrap();

        let bridges = DiscussionTag::find().all(&db).await.unwrap();
        assert!(bridges.is_empty());

        let tag = Tag::find_by_id(tag_id).one(&db).await.unwrap();
        assert!(tag.is_some(), "the tag itself survives");
    }
}
