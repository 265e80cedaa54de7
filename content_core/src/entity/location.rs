use crate::ids::LocationId;
use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Bounding box around a location: zero to four coordinate strings,
/// persisted as a JSON array. The four-element cap is enforced at the
/// service seam.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct BoundingBox(pub Vec<String>);

// Coordinates are stored as text, exactly as the upstream geocoder returns
// them. Immutable after creation except the display fields.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "location")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: LocationId,
    pub lat: String,
    pub lon: String,
    #[sea_orm(column_type = "Json", nullable)]
    pub bbox: Option<BoundingBox>,
    pub display_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::resource::Entity")]
    Resource,
}

impl Related<super::resource::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Resource.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
