use crate::ids::{LocationId, ResourceId, UserId};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "resource")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: ResourceId,
    pub created_by: UserId,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Exactly one Location per Resource; the Location is destroyed with it.
    #[sea_orm(unique)]
    pub location_id: LocationId,
    pub url: String,
    pub is_private: bool,
    pub terms_checked: bool,
    pub creation_date: DateTimeUtc,
    pub last_updated: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::LocationId",
        to = "super::location::Column::Id"
    )]
    Location,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::resource_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::resource_tag::Relation::Resource.def().rev())
    }
}

impl Related<super::topic::Entity> for Entity {
    fn to() -> RelationDef {
        super::resource_topic::Relation::Topic.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::resource_topic::Relation::Resource.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
