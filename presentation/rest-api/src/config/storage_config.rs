use std::env;
use std::path::PathBuf;

/// Where the JSON collections live.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    /// Environment variables:
    /// - DATA_DIR: directory holding `products.json` and `carts.json`
    ///   (default: "data")
    pub fn from_env() -> Self {
        let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
        Self {
            data_dir: PathBuf::from(data_dir),
        }
    }

    pub fn products_file(&self) -> PathBuf {
        self.data_dir.join("products.json")
    }

    pub fn carts_file(&self) -> PathBuf {
        self.data_dir.join("carts.json")
    }
}

/// Creates the data directory if it does not exist yet.
pub async fn init_data_dir(config: &StorageConfig) -> anyhow::Result<()> {
    if tokio::fs::try_exists(&config.data_dir).await? {
        return Ok(());
    }
    tokio::fs::create_dir_all(&config.data_dir).await?;
    tracing::info!(path = %config.data_dir.display(), "Data directory created");
    Ok(())
}
