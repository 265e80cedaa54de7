use crate::ids::TaskId;
use crate::lifecycle::{Lifecycle, SoftDeletable};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "task")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: TaskId,
    pub name: String,
    pub description: String,
    pub creation_date: DateTimeUtc,
    pub last_updated: DateTimeUtc,
    pub deletion_date: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::task_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::task_tag::Relation::Task.def().rev())
    }
}

impl SoftDeletable for Model {
    fn lifecycle(&self) -> Lifecycle {
        Lifecycle::from_deletion_date(self.deletion_date)
    }
}

impl ActiveModelBehavior for ActiveModel {}
