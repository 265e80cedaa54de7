use crate::ids::TopicId;
use crate::lifecycle::{Lifecycle, SoftDeletable};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

// `active` and `deprecation_date` together encode the topic lifecycle; no
// consistency rule between the two is enforced here.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "topic")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: TopicId,
    pub name: String,
    pub active: bool,
    pub description: String,
    pub creation_date: DateTimeUtc,
    pub last_updated: DateTimeUtc,
    pub deprecation_date: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::format::Entity> for Entity {
    fn to() -> RelationDef {
        super::topic_format::Relation::Format.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::topic_format::Relation::Topic.def().rev())
    }
}

impl Related<super::resource::Entity> for Entity {
    fn to() -> RelationDef {
        super::resource_topic::Relation::Resource.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::resource_topic::Relation::Topic.def().rev())
    }
}

impl SoftDeletable for Model {
    fn lifecycle(&self) -> Lifecycle {
        Lifecycle::from_deletion_date(self.deprecation_date)
    }
}

impl ActiveModelBehavior for ActiveModel {}
