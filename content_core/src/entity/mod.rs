// SeaORM entities for the content subsystem.
// One module per table; bridge tables get their own modules so the
// many-to-many relations can route through them with `via`.

pub mod discussion;
pub mod discussion_entry;
pub mod discussion_tag;
pub mod faq;
pub mod format;
pub mod image;
pub mod location;
pub mod resource;
pub mod resource_tag;
pub mod resource_topic;
pub mod role;
pub mod social_link;
pub mod tag;
pub mod task;
pub mod task_tag;
pub mod topic;
pub mod topic_format;
pub mod user;

#[cfg(test)]
mod tests;

pub mod prelude {
    // Re-export all entities for convenience
    pub use super::discussion::{
        ActiveModel as DiscussionActiveModel, Column as DiscussionColumn, Entity as Discussion,
        Model as DiscussionModel,
    };
    pub use super::discussion_entry::{
        ActiveModel as DiscussionEntryActiveModel, Column as DiscussionEntryColumn,
        Entity as DiscussionEntry, Model as DiscussionEntryModel,
    };
    pub use super::discussion_tag::{
        ActiveModel as DiscussionTagActiveModel, Column as DiscussionTagColumn,
        Entity as DiscussionTag, Model as DiscussionTagModel,
    };
    pub use super::faq::{
        ActiveModel as FaqActiveModel, Column as FaqColumn, Entity as Faq, Model as FaqModel,
    };
    pub use super::format::{
        ActiveModel as FormatActiveModel, Column as FormatColumn, Entity as Format,
        Model as FormatModel,
    };
    pub use super::image::{
        ActiveModel as ImageActiveModel, Column as ImageColumn, Entity as Image,
        Model as ImageModel,
    };
    pub use super::location::{
        ActiveModel as LocationActiveModel, BoundingBox, Column as LocationColumn,
        Entity as Location, Model as LocationModel,
    };
    pub use super::resource::{
        ActiveModel as ResourceActiveModel, Column as ResourceColumn, Entity as Resource,
        Model as ResourceModel,
    };
    pub use super::resource_tag::{
        ActiveModel as ResourceTagActiveModel, Column as ResourceTagColumn, Entity as ResourceTag,
        Model as ResourceTagModel,
    };
    pub use super::resource_topic::{
        ActiveModel as ResourceTopicActiveModel, Column as ResourceTopicColumn,
        Entity as ResourceTopic, Model as ResourceTopicModel,
    };
    pub use super::role::{
        ActiveModel as RoleActiveModel, Column as RoleColumn, Entity as Role, Model as RoleModel,
    };
    pub use super::social_link::{
        ActiveModel as SocialLinkActiveModel, Column as SocialLinkColumn, Entity as SocialLink,
        Model as SocialLinkModel,
    };
    pub use super::tag::{
        ActiveModel as TagActiveModel, Column as TagColumn, Entity as Tag, Model as TagModel,
    };
    pub use super::task::{
        ActiveModel as TaskActiveModel, Column as TaskColumn, Entity as Task, Model as TaskModel,
    };
    pub use super::task_tag::{
        ActiveModel as TaskTagActiveModel, Column as TaskTagColumn, Entity as TaskTag,
        Model as TaskTagModel,
    };
    pub use super::topic::{
        ActiveModel as TopicActiveModel, Column as TopicColumn, Entity as Topic,
        Model as TopicModel,
    };
    pub use super::topic_format::{
        ActiveModel as TopicFormatActiveModel, Column as TopicFormatColumn, Entity as TopicFormat,
        Model as TopicFormatModel,
    };
    pub use super::user::{
        ActiveModel as UserActiveModel, Column as UserColumn, Entity as User, Model as UserModel,
    };

    // Re-export commonly used SeaORM types and traits
    pub use sea_orm::{
        ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, Database, DatabaseConnection,
        DbConn, DbErr, EntityTrait, ModelTrait, NotSet, PaginatorTrait, QueryFilter, QueryOrder,
        QuerySelect, Related, RelationTrait, Set, TransactionTrait, Unchanged,
    };
}
