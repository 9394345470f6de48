use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::{
    error::{BlobError, Result},
    store::BlobStore,
    types::StoredObject,
};

const DEFAULT_BLOB_API_URL: &str = "https://blob.vercel-storage.com";

/// Blob store speaking the Vercel Blob REST protocol
///
/// Objects are always uploaded with public access and a random suffix, so
/// two uploads under the same name produce two distinct URLs.
pub struct VercelBlobStore {
    client: Client,
    base_url: Url,
    token: SecretString,
    api_version: String,
}

impl VercelBlobStore {
    pub fn new(client: Client, token: SecretString, base_url: Option<Url>, api_version: String) -> Result<Self> {
        let base_url = match base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BLOB_API_URL).map_err(|e| BlobError::InvalidRequest(e.to_string()))?,
        };

        Ok(Self {
            client,
            base_url,
            token,
            api_version,
        })
    }
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct PutBlobResponse {
    url: String,
    #[serde(default)]
    pathname: Option<String>,
}

/// Build the upload URL for `name`, percent-encoding it as a single path segment
fn object_url(base: &Url, name: &str) -> Result<Url> {
    let mut url = base.clone();

    url.path_segments_mut()
        .map_err(|()| BlobError::InvalidRequest(format!("base URL cannot hold a path: {base}")))?
        .pop_if_empty()
        .push(name);

    Ok(url)
}

async fn error_body(response: reqwest::Response) -> String {
    response.text().await.unwrap_or_else(|_| "Unknown error".to_string())
}

#[async_trait]
impl BlobStore for VercelBlobStore {
    async fn put(&self, name: &str, body: Vec<u8>, content_type: &str) -> Result<StoredObject> {
        let url = object_url(&self.base_url, name)?;

        tracing::debug!(name, bytes = body.len(), content_type, "uploading blob");

        let response = self
            .client
            .put(url)
            .bearer_auth(self.token.expose_secret())
            .header("x-api-version", &self.api_version)
            .header("x-content-type", content_type)
            .header("x-add-random-suffix", "1")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Blob upload request failed: {e}");
                BlobError::ConnectionError(format!("Failed to upload '{name}': {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = error_body(response).await;

            tracing::error!("Blob store upload error ({status}): {error_text}");

            return Err(match status.as_u16() {
                401 | 403 => BlobError::AuthenticationFailed(error_text),
                _ => BlobError::ApiError {
                    status: status.as_u16(),
                    message: error_text,
                },
            });
        }

        let result: PutBlobResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse blob upload response: {e}");
            BlobError::InvalidResponse(e.to_string())
        })?;

        tracing::debug!(name, url = %result.url, pathname = ?result.pathname, "blob uploaded");

        Ok(StoredObject {
            name: name.to_string(),
            url: result.url,
        })
    }

    async fn fetch(&self, object: &StoredObject) -> Result<Vec<u8>> {
        tracing::debug!(name = %object.name, url = %object.url, "fetching blob");

        let response = self.client.get(&object.url).send().await.map_err(|e| {
            tracing::error!("Blob fetch request failed: {e}");
            BlobError::ConnectionError(format!("Failed to fetch '{}': {e}", object.name))
        })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = error_body(response).await;

            tracing::error!("Blob fetch error ({status}): {error_text}");

            return Err(BlobError::ApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let bytes = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read blob body: {e}");
            BlobError::ConnectionError(format!("Failed to read '{}': {e}", object.name))
        })?;

        tracing::debug!(name = %object.name, bytes = bytes.len(), "blob fetched");

        Ok(bytes.to_vec())
    }
}
