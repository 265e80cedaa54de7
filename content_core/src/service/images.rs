use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use thiserror::Error;
use tracing::warn;

use crate::entity::prelude::{Image, ImageActiveModel, ImageModel};
use crate::events::{DeletionEvents, DeletionListener};
use crate::ids::ImageId;
use crate::storage::{FileStore, StorageError};

/// Logical namespace all derived image paths live under.
pub static IMAGE_NAMESPACE: &str = "images";

/// Extensions the upload validity check accepts, lowercase.
static VALID_IMAGE_EXTENSIONS: &[&str] =
    &["jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff"];

/// Derive the storage path for an uploaded file from the record's
/// identifier: `images/<id><lowercased extension>`.
///
/// The identifier, not the original name, guarantees uniqueness; only the
/// extension of the original survives, lowercased. A name with no extension
/// derives a path with no extension. Pure and deterministic; the caller
/// must have assigned the id before calling.
pub fn upload_path(id: ImageId, original_filename: &str) -> String {
    match extension_of(original_filename) {
        Some(ext) => format!("{}/{}{}", IMAGE_NAMESPACE, id, ext.to_lowercase()),
        None => format!("{}/{}", IMAGE_NAMESPACE, id),
    }
}

/// The extension of the final path component, dot included, or `None`.
///
/// Follows splitext conventions: only the last `.` counts
/// (`archive.tar.gz` gives `.gz`) and leading dots of the basename are part
/// of the name, not an extension (`.hidden` has none).
fn extension_of(filename: &str) -> Option<&str> {
    let base_start = filename
        .rfind(['/', '\\'])
        .map(|i| i + 1)
        .unwrap_or(0);
    let basename = &filename[base_start..];
    let name_start = basename.len() - basename.trim_start_matches('.').len();
    let name = &basename[name_start..];
    name.rfind('.').map(|i| &name[i..])
}

fn is_valid_image_extension(filename: &str) -> bool {
    match extension_of(filename) {
        Some(ext) => {
            let ext = ext.trim_start_matches('.').to_lowercase();
            VALID_IMAGE_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}

#[derive(Debug, Error)]
pub enum ImagesServiceError {
    #[error("fatal database error")]
    Db(#[from] DbErr),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("not a valid image filename: {0:?}")]
    InvalidExtension(String),
    #[error("image {0} not found")]
    NotFound(ImageId),
}

/// Removes the stored file after an image row has been deleted.
///
/// Best-effort: the row delete has already committed, so storage failures
/// are logged and swallowed rather than propagated.
pub struct ImageFileCleanup {
    store: Arc<dyn FileStore>,
}

impl ImageFileCleanup {
    pub fn new(store: Arc<dyn FileStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DeletionListener<ImageModel> for ImageFileCleanup {
    async fn on_deleted(&self, record: &ImageModel) {
        if record.file_object.is_empty() {
            return;
        }
        if let Err(error) = self.store.delete(&record.file_object).await {
            warn!(
                path = %record.file_object,
                %error,
                "failed to remove stored file for deleted image"
            );
        }
    }
}

#[derive(Clone)]
pub struct ImagesService {
    db: DatabaseConnection,
    store: Arc<dyn FileStore>,
    deleted: Arc<DeletionEvents<ImageModel>>,
}

impl ImagesService {
    pub fn new(
        db: DatabaseConnection,
        store: Arc<dyn FileStore>,
        deleted: Arc<DeletionEvents<ImageModel>>,
    ) -> Self {
        Self { db, store, deleted }
    }

    /// Validate the uploaded filename, derive the storage path, persist the
    /// bytes, and insert the record.
    ///
    /// The deriver only runs once the extension check has passed; a
    /// rejected upload stores nothing and inserts nothing.
    pub async fn create_image(
        &self,
        original_filename: &str,
        content: &[u8],
    ) -> Result<ImageModel, ImagesServiceError> {
        if !is_valid_image_extension(original_filename) {
            return Err(ImagesServiceError::InvalidExtension(
                original_filename.to_owned(),
            ));
        }

        let id = ImageId::new();
        let path = upload_path(id, original_filename);

        self.store.put(&path, content).await?;

        let image = ImageActiveModel {
            id: Set(id),
            file_object: Set(path),
            creation_date: Set(Utc::now()),
        };
        let model = image.insert(&self.db).await?;
        Ok(model)
    }

    pub async fn get_image(&self, id: ImageId) -> Result<Option<ImageModel>, ImagesServiceError> {
        Ok(Image::find_by_id(id).one(&self.db).await?)
    }

    /// Permanently remove an image row, then notify the delete-committed
    /// listeners so the stored file gets cleaned up.
    pub async fn delete_image(&self, id: ImageId) -> Result<(), ImagesServiceError> {
        let model = Image::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(ImagesServiceError::NotFound(id))?;

        Image::delete_by_id(id).exec(&self.db).await?;

        self.deleted.notify(&model).await;
        Ok(())
    }
}
