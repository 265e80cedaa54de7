use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, Set, TransactionTrait,
};
use thiserror::Error;

use crate::entity::location::BoundingBox;
use crate::entity::prelude::{
    Location, LocationActiveModel, LocationModel, Resource, ResourceActiveModel, ResourceModel,
    ResourceTagActiveModel, ResourceTopicActiveModel, Tag, TagModel,
};
use crate::ids::{LocationId, ResourceId, TagId, TopicId, UserId};

/// A bounding box carries at most four coordinate strings.
pub const MAX_BBOX_ELEMENTS: usize = 4;

#[derive(Debug, Error)]
pub enum ResourcesServiceError {
    #[error("fatal database error")]
    Db(#[from] DbErr),
    #[error("bounding box has {0} elements, at most {MAX_BBOX_ELEMENTS} allowed")]
    BboxTooLarge(usize),
    #[error("resource {0} not found")]
    NotFound(ResourceId),
}

/// Location fields supplied at resource creation.
pub struct NewLocation {
    pub lat: String,
    pub lon: String,
    pub bbox: Option<Vec<String>>,
    pub display_name: String,
}

pub struct NewResource {
    pub created_by: UserId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub url: String,
    pub is_private: bool,
    pub terms_checked: bool,
}

#[derive(Clone)]
pub struct ResourcesService {
    db: DatabaseConnection,
}

impl ResourcesService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a Location and its Resource in one transaction, then attach
    /// tags and topics through the bridge tables. A Resource never exists
    /// without its Location.
    pub async fn create_resource(
        &self,
        new: NewResource,
        location: NewLocation,
        tags: &[TagId],
        topics: &[TopicId],
    ) -> Result<ResourceModel, ResourcesServiceError> {
        if let Some(bbox) = &location.bbox {
            if bbox.len() > MAX_BBOX_ELEMENTS {
                return Err(ResourcesServiceError::BboxTooLarge(bbox.len()));
            }
        }

        let txn = self.db.begin().await?;

        let location_model = LocationActiveModel {
            id: Set(LocationId::new()),
            lat: Set(location.lat),
            lon: Set(location.lon),
            bbox: Set(location.bbox.map(BoundingBox)),
            display_name: Set(location.display_name),
        }
        .insert(&txn)
        .await?;

        let now = Utc::now();
        let resource = ResourceActiveModel {
            id: Set(ResourceId::new()),
            created_by: Set(new.created_by),
            name: Set(new.name),
            description: Set(new.description),
            category: Set(new.category),
            location_id: Set(location_model.id),
            url: Set(new.url),
            is_private: Set(new.is_private),
            terms_checked: Set(new.terms_checked),
            creation_date: Set(now),
            last_updated: Set(now),
        }
        .insert(&txn)
        .await?;

        for tag_id in tags {
            ResourceTagActiveModel {
                resource_id: Set(resource.id),
                tag_id: Set(*tag_id),
            }
            .insert(&txn)
            .await?;
        }

        for topic_id in topics {
            ResourceTopicActiveModel {
                resource_id: Set(resource.id),
                topic_id: Set(*topic_id),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;
        Ok(resource)
    }

    pub async fn get_resource(
        &self,
        id: ResourceId,
    ) -> Result<Option<ResourceModel>, ResourcesServiceError> {
        Ok(Resource::find_by_id(id).one(&self.db).await?)
    }

    pub async fn get_location(
        &self,
        resource: &ResourceModel,
    ) -> Result<Option<LocationModel>, ResourcesServiceError> {
        Ok(resource.find_related(Location).one(&self.db).await?)
    }

    /// Destroy a Resource together with its Location, in one transaction.
    /// Bridge rows go via the declared foreign-key cascades.
    pub async fn delete_resource(&self, id: ResourceId) -> Result<(), ResourcesServiceError> {
        let resource = Resource::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(ResourcesServiceError::NotFound(id))?;

        let txn = self.db.begin().await?;

        // The resource row goes first; its location FK is declared
        // restrict, so the order matters.
        Resource::delete_by_id(id).exec(&txn).await?;
        Location::delete_by_id(resource.location_id).exec(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    /// Bump `last_updated` and apply new display fields.
    pub async fn update_resource(
        &self,
        id: ResourceId,
        name: Option<String>,
        description: Option<String>,
        category: Option<String>,
    ) -> Result<ResourceModel, ResourcesServiceError> {
        let resource = Resource::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(ResourcesServiceError::NotFound(id))?;

        let mut active: ResourceActiveModel = resource.into();
        if let Some(name) = name {
            active.name = Set(name);
        }
        if let Some(description) = description {
            active.description = Set(description);
        }
        if let Some(category) = category {
            active.category = Set(category);
        }
        active.last_updated = Set(Utc::now());

        Ok(active.update(&self.db).await?)
    }

    pub async fn tags_of(
        &self,
        resource: &ResourceModel,
    ) -> Result<Vec<TagModel>, ResourcesServiceError> {
        Ok(resource.find_related(Tag).all(&self.db).await?)
    }
}
