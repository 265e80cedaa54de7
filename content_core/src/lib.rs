pub mod config;
pub mod entity;
pub mod error;
pub mod events;
pub mod ids;
pub mod lifecycle;
pub mod models;
pub mod service;
pub mod storage;

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;
use tracing::info;

use crate::error::ContentError;
use crate::events::DeletionEvents;
use crate::service::discussions::DiscussionsService;
use crate::service::faqs::FaqsService;
use crate::service::images::{ImageFileCleanup, ImagesService};
use crate::service::resources::ResourcesService;
use crate::storage::{FileStore, FilesystemFileStore};

static CONTENT_CORE: OnceCell<Arc<ContentCore>> = OnceCell::const_new();

pub async fn core() -> Arc<ContentCore> {
    CONTENT_CORE
        .get_or_init(|| async move { Arc::new(ContentCore::start().await.expect("failed to init")) })
        .await
        .clone()
}

/// Main runtime handle for the content subsystem.
pub struct ContentCore {
    pub config: config::ContentConfig,

    pub db: DatabaseConnection,

    /// File storage collaborator backing image uploads.
    pub store: Arc<dyn FileStore>,

    pub images: ImagesService,
    pub resources: ResourcesService,
    pub discussions: DiscussionsService,
    pub faqs: FaqsService,
}

impl ContentCore {
    pub async fn start() -> Result<Self, ContentError> {
        let config = config::get_or_init().await?;

        // DB + migrations
        let db = models::open_or_create_db(&config).await?;
        models::migrate_up(&db).await?;
        info!(database = %config.database_path().display(), "database ready");

        let store: Arc<dyn FileStore> =
            Arc::new(FilesystemFileStore::new(config.media_dir()).await?);

        // Delete-committed subscriptions happen exactly once, here. The
        // cleanup listener keeps stored files consistent with image rows.
        let mut image_deleted = DeletionEvents::new();
        image_deleted.subscribe(Arc::new(ImageFileCleanup::new(store.clone())));

        let images = ImagesService::new(db.clone(), store.clone(), Arc::new(image_deleted));
        let resources = ResourcesService::new(db.clone());
        let discussions = DiscussionsService::new(db.clone());
        let faqs = FaqsService::new(db.clone());

        Ok(Self {
            config,
            db,
            store,
            images,
            resources,
            discussions,
            faqs,
        })
    }
}

pub mod prelude {
    pub use super::entity;
    pub use super::ids;
    pub use super::models;

    pub use super::events;
    pub use super::lifecycle;
    pub use super::service;
    pub use super::storage;

    pub use super::config;
    pub use super::error;
}
