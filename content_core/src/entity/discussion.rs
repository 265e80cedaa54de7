use crate::ids::{DiscussionId, UserId};
use crate::lifecycle::{Lifecycle, SoftDeletable};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "discussion")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: DiscussionId,
    pub created_by: UserId,
    pub title: String,
    pub category: String,
    pub creation_date: DateTimeUtc,
    pub deletion_date: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::discussion_entry::Entity")]
    DiscussionEntry,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::discussion_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiscussionEntry.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::discussion_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::discussion_tag::Relation::Discussion.def().rev())
    }
}

impl SoftDeletable for Model {
    fn lifecycle(&self) -> Lifecycle {
        Lifecycle::from_deletion_date(self.deletion_date)
    }
}

impl ActiveModelBehavior for ActiveModel {}
