#[cfg(test)]
mod entity_tests {
    use crate::entity::prelude::*;
    use crate::ids::*;
    use crate::lifecycle::{Lifecycle, SoftDeletable};
    use crate::models::migrator::Migrator;
    use chrono::Utc;
    use sea_orm_migration::MigratorTrait;

    /// Test helper to create and migrate an in-memory database
    async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory database");

        // Run all migrations
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        db
    }

    async fn create_user(db: &DatabaseConnection, username: &str) -> UserId {
        let user_id = UserId::new();
        let user = UserActiveModel {
            id: Set(user_id),
            username: Set(username.to_string()),
            creation_date: Set(Utc::now()),
        };
        User::insert(user).exec(db).await.expect("Failed to insert user");
        user_id
    }

    #[tokio::test]
    async fn test_create_and_find_image() {
        let db = setup_test_db().await;

        let image_id = ImageId::new();
        let image = ImageActiveModel {
            id: Set(image_id),
            file_object: Set(format!("images/{image_id}.png")),
            creation_date: Set(Utc::now()),
        };

        Image::insert(image)
            .exec(&db)
            .await
            .expect("Failed to insert image");

        let found = Image::find_by_id(image_id)
            .one(&db)
            .await
            .expect("Failed to query image");

        assert!(found.is_some());
        let found_image = found.unwrap();
        assert_eq!(found_image.id, image_id);
        assert_eq!(found_image.file_object, format!("images/{image_id}.png"));
    }

    #[tokio::test]
    async fn test_duplicate_image_id_rejected() {
        let db = setup_test_db().await;

        let image_id = ImageId::new();
        let first = ImageActiveModel {
            id: Set(image_id),
            file_object: Set("images/a.png".to_string()),
            creation_date: Set(Utc::now()),
        };
        Image::insert(first).exec(&db).await.unwrap();

        let second = ImageActiveModel {
            id: Set(image_id),
            file_object: Set("images/b.png".to_string()),
            creation_date: Set(Utc::now()),
        };
        let result = Image::insert(second).exec(&db).await;
        assert!(result.is_err(), "identifiers are unique per table");
    }

    #[tokio::test]
    async fn test_filter_faqs_by_locale_and_order() {
        let db = setup_test_db().await;

        for (i, iso) in ["en", "en", "de"].iter().enumerate() {
            let faq = FaqActiveModel {
                id: Set(FaqId::new()),
                iso: Set(iso.to_string()),
                primary: Set(i == 0),
                question: Set(format!("Question {i}")),
                answer: Set(format!("Answer {i}")),
                order: Set(i as i32),
                last_updated: Set(Utc::now()),
            };
            Faq::insert(faq).exec(&db).await.unwrap();
        }

        let english = Faq::find()
            .filter(FaqColumn::Iso.eq("en"))
            .order_by_asc(FaqColumn::Order)
            .all(&db)
            .await
            .unwrap();

        assert_eq!(english.len(), 2);
        assert!(english[0].primary);
        assert_eq!(english[0].order, 0);
    }

    #[tokio::test]
    async fn test_role_soft_delete_lifecycle() {
        let db = setup_test_db().await;

        let role_id = RoleId::new();
        let role = RoleActiveModel {
            id: Set(role_id),
            name: Set("moderator".to_string()),
            is_custom: Set(false),
            description: Set("".to_string()),
            creation_date: Set(Utc::now()),
            deletion_date: Set(None),
        };
        Role::insert(role).exec(&db).await.unwrap();

        let active = Role::find_by_id(role_id).one(&db).await.unwrap().unwrap();
        assert_eq!(active.lifecycle(), Lifecycle::Active);

        let at = Utc::now();
        let mut retired: RoleActiveModel = active.into();
        retired.deletion_date = Set(Some(at));
        let retired = retired.update(&db).await.unwrap();

        assert_eq!(retired.lifecycle(), Lifecycle::SoftDeleted(at));
        assert!(!retired.is_active());

        // Soft-deleted rows stay visible to plain reads.
        let still_there = Role::find_by_id(role_id).one(&db).await.unwrap();
        assert!(still_there.is_some());
    }

    #[tokio::test]
    async fn test_task_tags_many_to_many() {
        let db = setup_test_db().await;

        let task_id = TaskId::new();
        let task = TaskActiveModel {
            id: Set(task_id),
            name: Set("Flyer run".to_string()),
            description: Set("".to_string()),
            creation_date: Set(Utc::now()),
            last_updated: Set(Utc::now()),
            deletion_date: Set(None),
        };
        Task::insert(task).exec(&db).await.unwrap();

        for text in ["outreach", "print"] {
            let tag_id = TagId::new();
            let tag = TagActiveModel {
                id: Set(tag_id),
                text: Set(text.to_string()),
                description: Set("".to_string()),
                creation_date: Set(Utc::now()),
            };
            Tag::insert(tag).exec(&db).await.unwrap();

            let bridge = TaskTagActiveModel {
                task_id: Set(task_id),
                tag_id: Set(tag_id),
            };
            TaskTag::insert(bridge).exec(&db).await.unwrap();
        }

        let tasks_with_tags = Task::find()
            .filter(TaskColumn::Id.eq(task_id))
            .find_with_related(Tag)
            .all(&db)
            .await
            .unwrap();

        assert_eq!(tasks_with_tags.len(), 1);
        let (task, tags) = &tasks_with_tags[0];
        assert_eq!(task.id, task_id);
        assert_eq!(tags.len(), 2);
    }

    #[tokio::test]
    async fn test_topic_formats_many_to_many() {
        let db = setup_test_db().await;

        let topic_id = TopicId::new();
        let topic = TopicActiveModel {
            id: Set(topic_id),
            name: Set("climate".to_string()),
            active: Set(true),
            description: Set("".to_string()),
            creation_date: Set(Utc::now()),
            last_updated: Set(Utc::now()),
            deprecation_date: Set(None),
        };
        Topic::insert(topic).exec(&db).await.unwrap();

        let format_id = FormatId::new();
        let format = FormatActiveModel {
            id: Set(format_id),
            name: Set("workshop".to_string()),
            creation_date: Set(Utc::now()),
        };
        Format::insert(format).exec(&db).await.unwrap();

        let bridge = TopicFormatActiveModel {
            topic_id: Set(topic_id),
            format_id: Set(format_id),
        };
        TopicFormat::insert(bridge).exec(&db).await.unwrap();

        let topics_with_formats = Topic::find()
            .filter(TopicColumn::Id.eq(topic_id))
            .find_with_related(Format)
            .all(&db)
            .await
            .unwrap();

        assert_eq!(topics_with_formats.len(), 1);
        let (topic, formats) = &topics_with_formats[0];
        assert_eq!(topic.id, topic_id);
        assert_eq!(formats.len(), 1);
        assert_eq!(formats[0].name, "workshop");
    }

    #[tokio::test]
    async fn test_duplicate_bridge_row_rejected() {
        let db = setup_test_db().await;

        let user_id = create_user(&db, "author").await;
        let discussion_id = DiscussionId::new();
        let discussion = DiscussionActiveModel {
            id: Set(discussion_id),
            created_by: Set(user_id),
            title: Set("Thread".to_string()),
            category: Set("".to_string()),
            creation_date: Set(Utc::now()),
            deletion_date: Set(None),
        };
        Discussion::insert(discussion).exec(&db).await.unwrap();

        let tag_id = TagId::new();
        let tag = TagActiveModel {
            id: Set(tag_id),
            text: Set("tag".to_string()),
            description: Set("".to_string()),
            creation_date: Set(Utc::now()),
        };
        Tag::insert(tag).exec(&db).await.unwrap();

        let bridge = DiscussionTagActiveModel {
            discussion_id: Set(discussion_id),
            tag_id: Set(tag_id),
        };
        DiscussionTag::insert(bridge.clone()).exec(&db).await.unwrap();

        let result = DiscussionTag::insert(bridge).exec(&db).await;
        assert!(result.is_err(), "composite primary key forbids duplicates");
    }

    #[tokio::test]
    async fn test_location_bbox_round_trips_through_json() {
        let db = setup_test_db().await;

        let location_id = LocationId::new();
        let bbox = BoundingBox(vec!["52.3".to_string(), "52.7".to_string()]);
        let location = LocationActiveModel {
            id: Set(location_id),
            lat: Set("52.5200".to_string()),
            lon: Set("13.4050".to_string()),
            bbox: Set(Some(bbox.clone())),
            display_name: Set("Berlin".to_string()),
        };
        Location::insert(location).exec(&db).await.unwrap();

        let found = Location::find_by_id(location_id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.bbox, Some(bbox));
    }

    #[tokio::test]
    async fn test_deleting_user_cascades_to_their_discussions() {
        let db = setup_test_db().await;

        let user_id = create_user(&db, "leaving").await;
        let discussion = DiscussionActiveModel {
            id: Set(DiscussionId::new()),
            created_by: Set(user_id),
            title: Set("Mine".to_string()),
            category: Set("".to_string()),
            creation_date: Set(Utc::now()),
            deletion_date: Set(None),
        };
        Discussion::insert(discussion).exec(&db).await.unwrap();

        User::delete_by_id(user_id).exec(&db).await.unwrap();

        let remaining = Discussion::find()
            .filter(DiscussionColumn::CreatedBy.eq(user_id))
            .all(&db)
            .await
            .unwrap();
        assert!(remaining.is_empty(), "discussions cascade with their owner");
    }
}
