//! Access to the memories REST backend.
//!
//! - [`MemoriesBackend`]: the trait every view depends on
//! - [`HttpBackend`]: the blocking `reqwest` implementation
//! - [`BlobHandle`]: scoped lifetime for downloaded payloads

mod blob;
mod http;
mod traits;

pub use blob::BlobHandle;
pub use http::{HttpBackend, HttpBackendConfig};
pub use traits::MemoriesBackend;
