use crate::ids::FormatId;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

// Minimal stand-in for the external events entity that topics reference.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "format")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: FormatId,
    pub name: String,
    pub creation_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::topic::Entity> for Entity {
    fn to() -> RelationDef {
        super::topic_format::Relation::Topic.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::topic_format::Relation::Format.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
