//! Client for the external object store that keeps uploaded and generated files

#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]

mod error;
mod store;
mod types;
mod vercel;

pub use error::{BlobError, Result};
pub use store::BlobStore;
pub use types::StoredObject;
pub use vercel::VercelBlobStore;
