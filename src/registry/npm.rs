//! npm Registry adapter
//!
//! Fetches package metadata documents from the npm registry.
//! API endpoint: https://registry.npmjs.org/{package}

use crate::domain::PackageMetadata;
use crate::error::RegistryError;
use crate::registry::{HttpClient, MetadataSource};
use async_trait::async_trait;

/// npm registry base URL
pub const NPM_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// npm Registry adapter
pub struct NpmRegistry {
    client: HttpClient,
    base_url: String,
}

impl NpmRegistry {
    /// Create a new npm adapter against the public registry
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, NPM_REGISTRY_URL)
    }

    /// Create a new npm adapter against a mirror or private registry
    pub fn with_base_url(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build the URL for a package
    fn build_url(&self, package: &str) -> String {
        format!("{}/{}", self.base_url, package)
    }

    /// Fetch the metadata document, surfacing transport errors
    pub async fn fetch(&self, package: &str) -> Result<PackageMetadata, RegistryError> {
        let url = self.build_url(package);
        let mut metadata: PackageMetadata = self.client.get_json(&url, package, "npm").await?;

        if metadata.name.is_empty() {
            metadata.name = package.to_string();
        }

        Ok(metadata)
    }
}

#[async_trait]
impl MetadataSource for NpmRegistry {
    fn source_name(&self) -> &str {
        "npm"
    }

    async fn fetch_package_metadata(&self, package: &str) -> Option<PackageMetadata> {
        match self.fetch(package).await {
            Ok(metadata) => {
                tracing::debug!(
                    package = %package,
                    versions = metadata.versions.len(),
                    "Fetched package metadata"
                );
                Some(metadata)
            }
            Err(e) => {
                tracing::warn!(package = %package, error = %e, "Registry lookup failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_npm_registry_source_name() {
        let registry = NpmRegistry::new(HttpClient::new().unwrap());
        assert_eq!(registry.source_name(), "npm");
    }

    #[test]
    fn test_build_url() {
        let registry = NpmRegistry::new(HttpClient::new().unwrap());
        assert_eq!(
            registry.build_url("rxjs"),
            "https://registry.npmjs.org/rxjs"
        );
    }

    #[test]
    fn test_build_url_scoped_package() {
        let registry = NpmRegistry::new(HttpClient::new().unwrap());
        assert_eq!(
            registry.build_url("@angular/core"),
            "https://registry.npmjs.org/@angular/core"
        );
    }

    #[test]
    fn test_custom_base_url_trailing_slash() {
        let registry =
            NpmRegistry::with_base_url(HttpClient::new().unwrap(), "http://localhost:4873/");
        assert_eq!(
            registry.build_url("ngx-toastr"),
            "http://localhost:4873/ngx-toastr"
        );
    }

    #[tokio::test]
    async fn test_unreachable_registry_is_absent() {
        let client = HttpClient::with_timeout(std::time::Duration::from_millis(200))
            .unwrap()
            .with_max_retries(0);
        // Port 9 (discard) on localhost is not expected to serve HTTP
        let registry = NpmRegistry::with_base_url(client, "http://127.0.0.1:9");
        assert!(registry.fetch_package_metadata("rxjs").await.is_none());
    }
}
