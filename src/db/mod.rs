pub mod document;
pub mod products;
pub mod users;

pub use document::{Document, next_id};
pub use products::ProductQuery;
pub use users::UserFilter;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::Result;

/// Store handle type (Arc-wrapped for sharing across handlers)
pub type Db = Arc<Store>;

/// Flat JSON file holding every product and user
///
/// Each read parses the whole file; each mutation rewrites it. Mutations made
/// through the same `Store` are serialized, other processes are not locked out.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    write_lock: Mutex<()>,
}

/// Open the JSON store at the given path
///
/// The file itself is created on the first write.
pub fn open_store(path: impl AsRef<Path>) -> std::io::Result<Db> {
    tracing::info!("Opening data file at: {:?}", path.as_ref());

    // Create parent directory if it doesn't exist
    if let Some(parent) = path.as_ref().parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).inspect_err(|e| {
            tracing::error!("Failed to create data directory: {}", e);
        })?;
    }

    Ok(Arc::new(Store {
        path: path.as_ref().to_path_buf(),
        write_lock: Mutex::new(()),
    }))
}

impl Store {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document, surfacing read and parse failures
    ///
    /// A missing file is not an error: it is an empty store.
    pub async fn try_load(&self) -> Result<Document> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Document::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Read the document, falling back to an empty one if it cannot be read
    pub async fn load(&self) -> Document {
        self.try_load().await.unwrap_or_else(|e| {
            tracing::error!("Failed to read data file {:?}: {}", self.path, e);
            Document::default()
        })
    }

    /// Rewrite the whole file with `doc`
    pub async fn save(&self, doc: &Document) -> Result<()> {
        let contents = serde_json::to_string_pretty(doc)?;
        tokio::fs::write(&self.path, contents)
            .await
            .inspect_err(|e| tracing::error!("Failed to write data file {:?}: {}", self.path, e))?;
        Ok(())
    }

    /// Read-modify-write under the store's write lock
    ///
    /// The file is only rewritten when it was read successfully and `f`
    /// succeeds. An unreadable file is never replaced.
    pub async fn update<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Document) -> Result<T>,
    {
        let _guard = self.write_lock.lock().await;

        let mut doc = self.try_load().await.inspect_err(|e| {
            tracing::error!("Refusing to write over unreadable data file {:?}: {}", self.path, e);
        })?;
        let output = f(&mut doc)?;
        self.save(&doc).await?;

        Ok(output)
    }
}
