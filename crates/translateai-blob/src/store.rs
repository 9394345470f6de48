use async_trait::async_trait;

use crate::types::StoredObject;

/// Object storage used by the translation pipeline
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Upload `body` under `name` with public access
    async fn put(&self, name: &str, body: Vec<u8>, content_type: &str) -> crate::error::Result<StoredObject>;

    /// Download the bytes behind a stored object's public URL
    async fn fetch(&self, object: &StoredObject) -> crate::error::Result<Vec<u8>>;
}
