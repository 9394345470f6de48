use serde::{Deserialize, Serialize};

/// A named, publicly retrievable object in the blob store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredObject {
    /// Name the object was uploaded under
    pub name: String,
    /// Public URL assigned by the store
    pub url: String,
}
