mod error;
mod http;
#[cfg(test)]
pub mod mock;

pub use error::{ClientError, ClientResult};
pub use http::NetworkHttpClient;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// Collection root of the food plates resource.
pub const FOODS_PATH: &str = "foods";

/// Path of a single food plate.
pub fn food_path(id: u64) -> String {
    format!("{}/{}", FOODS_PATH, id)
}

/// JSON-over-HTTP verbs the dashboard needs from its backend.
///
/// Paths are relative to the configured base URL. An empty response body
/// decodes as JSON `null`, so callers that do not care about the payload can
/// ask for `serde::de::IgnoredAny`.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
}
