use crate::ids::ImageId;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// An uploaded image. `file_object` holds the derived storage path
/// (`images/<id><ext>`); the underlying file is removed when the row is
/// deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "image")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: ImageId,
    pub file_object: String,
    pub creation_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
