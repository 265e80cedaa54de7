use crate::ids::RoleId;
use crate::lifecycle::{Lifecycle, SoftDeletable};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "role")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: RoleId,
    pub name: String,
    pub is_custom: bool,
    pub description: String,
    pub creation_date: DateTimeUtc,
    pub deletion_date: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl SoftDeletable for Model {
    fn lifecycle(&self) -> Lifecycle {
        Lifecycle::from_deletion_date(self.deletion_date)
    }
}

impl ActiveModelBehavior for ActiveModel {}
