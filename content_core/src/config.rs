use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::fs;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

static DATA_DIR_NAME: &str = "content_core";
static CONTENT_DB_NAME: &str = "content_db.sqlite";
static MEDIA_DIR_NAME: &str = "media";
static CONFIG_FILE_NAME: &str = "config.json";

// For now this directory structure should be like
// data_dir_path
// |- content_core
//    |- content_db.sqlite
//    |- config.json
//    |- media/
//       |- images/

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to find a data directory on this platform")]
    NoDataDir,
    #[error("config IO error")]
    Io(#[from] std::io::Error),
    #[error("config parse error")]
    Parse(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ContentConfig {
    database_path: PathBuf,

    /// Root directory the file store writes under; derived storage paths
    /// (`images/...`) are relative to this.
    media_dir: PathBuf,
}

impl ContentConfig {
    /// Creates a new ContentConfig rooted at the specified data directory
    fn new(data_dir: PathBuf) -> Self {
        let database_path = data_dir.join(CONTENT_DB_NAME);
        let media_dir = data_dir.join(MEDIA_DIR_NAME);

        ContentConfig {
            database_path,
            media_dir,
        }
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    pub fn media_dir(&self) -> &Path {
        &self.media_dir
    }
}

/// Gets the existing config or initializes a new one if it doesn't exist
pub async fn get_or_init() -> Result<ContentConfig, ConfigError> {
    let data_dir = dirs::data_dir().ok_or(ConfigError::NoDataDir)?;

    let content_dir = data_dir.join(DATA_DIR_NAME);
    let config_path = content_dir.join(CONFIG_FILE_NAME);

    // Create the content directory if it doesn't exist
    fs::create_dir_all(&content_dir).await?;

    // Check if config file exists
    if config_path.exists() {
        // Read and deserialize existing config
        let mut file = fs::File::open(&config_path).await?;
        let mut contents = String::new();
        file.read_to_string(&mut contents).await?;

        let config: ContentConfig = serde_json::from_str(&contents)?;
        Ok(config)
    } else {
        // Create new config
        let config = ContentConfig::new(content_dir.clone());

        // Serialize and write to file
        let json = serde_json::to_string_pretty(&config)?;
        let mut file = fs::File::create(&config_path).await?;
        file.write_all(json.as_bytes()).await?;

        Ok(config)
    }
}
