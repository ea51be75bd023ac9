use crate::domain::model::{AuthToken, Credentials, CustomerPayload};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub trait Storage: Send + Sync {
    /// Reads a file given by the caller, independent of the output directory.
    fn read_file(&self, path: &Path) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;

    /// Writes `name` inside the output directory, replacing any existing file,
    /// and returns the absolute path written.
    fn write_file(
        &self,
        name: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<PathBuf>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn api_key(&self) -> &str;
    fn output_dir(&self) -> PathBuf;
    fn request_timeout(&self) -> Duration;
}

pub trait CredentialsProvider {
    fn credentials(&self) -> Result<Credentials>;
}

#[async_trait]
pub trait CustomerApi: Send + Sync {
    async fn authenticate(&self, credentials: Credentials) -> Result<AuthToken>;
    async fn fetch_customer_data(&self, token: &AuthToken) -> Result<CustomerPayload>;
}
