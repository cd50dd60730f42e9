use async_trait::async_trait;
use std::io;
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::RwLock;

/// Name of the single document slot on disk.
const SLOT_FILE: &str = "uploaded.pdf";

/// Single-slot store for the most recently uploaded document.
///
/// A new `put` silently replaces whatever was stored before; `get` returns
/// `None` until the first upload.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn put(&self, data: Vec<u8>) -> io::Result<()>;
    async fn get(&self) -> io::Result<Option<Vec<u8>>>;
}

pub struct LocalDocumentStore {
    path: PathBuf,
    // Guards the slot so a get never observes a half-written file.
    lock: RwLock<()>,
}

impl LocalDocumentStore {
    pub async fn new(base_path: impl Into<PathBuf>) -> io::Result<Self> {
        let base_path = base_path.into();
        if !base_path.exists() {
            fs::create_dir_all(&base_path).await?;
        }
        Ok(Self {
            path: base_path.join(SLOT_FILE),
            lock: RwLock::new(()),
        })
    }
}

#[async_trait]
impl DocumentStore for LocalDocumentStore {
    async fn put(&self, data: Vec<u8>) -> io::Result<()> {
        let _guard = self.lock.write().await;
        fs::write(&self.path, data).await
    }

    async fn get(&self) -> io::Result<Option<Vec<u8>>> {
        let _guard = self.lock.read().await;
        match fs::read(&self.path).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}
