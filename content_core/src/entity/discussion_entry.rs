use crate::ids::{DiscussionEntryId, DiscussionId, UserId};
use crate::lifecycle::{Lifecycle, SoftDeletable};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "discussion_entry")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: DiscussionEntryId,
    pub discussion_id: DiscussionId,
    pub created_by: UserId,
    pub text: String,
    pub creation_date: DateTimeUtc,
    pub last_updated: DateTimeUtc,
    pub deletion_date: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::discussion::Entity",
        from = "Column::DiscussionId",
        to = "super::discussion::Column::Id"
    )]
    Discussion,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::discussion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Discussion.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl SoftDeletable for Model {
    fn lifecycle(&self) -> Lifecycle {
        Lifecycle::from_deletion_date(self.deletion_date)
    }
}

impl ActiveModelBehavior for ActiveModel {}
