//! Blocking HTTP implementation of [`MemoriesBackend`].

use super::traits::MemoriesBackend;
use crate::error::{MemoriesError, Result};
use crate::model::{FileEdit, FileRecord, FileUpload, Vignette, VignetteDraft};
use reqwest::blocking::{multipart, Client, RequestBuilder, Response};
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpBackendConfig {
    /// Backend origin, e.g. `http://localhost:8000`
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Bearer token from the session provider
    pub token: Option<String>,
}

impl Default for HttpBackendConfig {
    fn default() -> Self {
        Self {
            base_url: crate::config::DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(crate::config::DEFAULT_TIMEOUT_SECS),
            token: None,
        }
    }
}

/// HTTP client for the memories REST API.
pub struct HttpBackend {
    client: Client,
    config: HttpBackendConfig,
}

fn network_error(context: &str, err: &reqwest::Error) -> MemoriesError {
    MemoriesError::network(context, err.to_string())
}

/// Pull the `detail` field out of an error body, if there is one.
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

impl HttpBackend {
    /// Create a new HTTP backend.
    pub fn new(config: HttpBackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| network_error("Failed to create HTTP client", &e))?;

        Ok(Self { client, config })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match &self.config.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and turn non-success statuses into [`MemoriesError::Api`].
    fn send(&self, builder: RequestBuilder, context: &str) -> Result<Response> {
        let response = builder.send().map_err(|e| network_error(context, &e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        let detail = extract_detail(&body);
        tracing::debug!("{} failed with {}: {}", context, status.as_u16(), body);
        Err(MemoriesError::api(context, status.as_u16(), detail))
    }

    fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder, context: &str) -> Result<T> {
        let response = self.send(builder, context)?;
        response
            .json()
            .map_err(|e| MemoriesError::invalid_response(context, e.to_string()))
    }
}

impl MemoriesBackend for HttpBackend {
    fn name(&self) -> &'static str {
        "http"
    }

    fn list_vignettes(&self) -> Result<Vec<Vignette>> {
        self.send_json(self.request(Method::GET, "/api/vignettes"), "fetching vignettes")
    }

    fn create_vignette(&self, draft: &VignetteDraft) -> Result<Vignette> {
        let builder = self.request(Method::POST, "/api/vignettes").json(draft);
        self.send_json(builder, "creating vignette")
    }

    fn update_vignette(&self, id: i64, draft: &VignetteDraft) -> Result<Vignette> {
        let builder = self
            .request(Method::PUT, &format!("/api/vignettes/{id}"))
            .json(draft);
        self.send_json(builder, &format!("updating vignette {id}"))
    }

    fn delete_vignette(&self, id: i64) -> Result<()> {
        let builder = self.request(Method::DELETE, &format!("/api/vignettes/{id}"));
        self.send(builder, &format!("deleting vignette {id}"))?;
        Ok(())
    }

    fn list_files(&self) -> Result<Vec<FileRecord>> {
        self.send_json(self.request(Method::GET, "/api/files"), "fetching files")
    }

    fn fetch_file(&self, id: i64) -> Result<Vec<u8>> {
        let context = format!("fetching file {id}");
        let response = self.send(self.request(Method::GET, &format!("/api/files/{id}")), &context)?;
        let bytes = response
            .bytes()
            .map_err(|e| network_error(&context, &e))?;
        Ok(bytes.to_vec())
    }

    fn upload_file(&self, upload: &FileUpload) -> Result<FileRecord> {
        let context = format!("uploading {}", upload.file_name);
        let part = multipart::Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(&upload.mime_type)
            .map_err(|e| MemoriesError::validation(format!("{context}: {e}")))?;
        let form = multipart::Form::new()
            .part("file", part)
            .text("title", upload.file_name.clone());

        let builder = self.request(Method::POST, "/api/files").multipart(form);
        self.send_json(builder, &context)
    }

    fn update_file(&self, id: i64, edit: &FileEdit) -> Result<FileRecord> {
        let form = multipart::Form::new()
            .text("title", edit.title.clone())
            .text("description", edit.description.clone());
        let builder = self
            .request(Method::PUT, &format!("/api/files/{id}"))
            .multipart(form);
        self.send_json(builder, &format!("updating file {id}"))
    }

    fn delete_file(&self, id: i64) -> Result<()> {
        let builder = self.request(Method::DELETE, &format!("/api/files/{id}"));
        self.send(builder, &format!("deleting file {id}"))?;
        Ok(())
    }

    fn list_photos(&self, limit: u32) -> Result<Vec<serde_json::Value>> {
        let builder = self
            .request(Method::GET, "/api/photos")
            .query(&[("limit", limit)]);
        self.send_json(builder, "fetching photos")
    }

    fn list_audio(&self) -> Result<Vec<serde_json::Value>> {
        self.send_json(self.request(Method::GET, "/api/audio"), "fetching audio")
    }
}
