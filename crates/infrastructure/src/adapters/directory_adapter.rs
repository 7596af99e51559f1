//! Directory adapter - Implements HospitalDirectoryPort using integration_directory

use application::error::ApplicationError;
use application::ports::{DirectoryEntry, HospitalDirectoryPort};
use async_trait::async_trait;
use integration_directory::{
    DekontaminasiClient, DirectoryClient, DirectoryConfig, DirectoryError, HospitalEntry,
};
use tracing::{debug, instrument, warn};

/// Adapter for the dekontaminasi.com hospital directory
pub struct DirectoryAdapter {
    client: Box<dyn DirectoryClient>,
}

impl std::fmt::Debug for DirectoryAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryAdapter")
            .field("client", &"DirectoryClient")
            .finish()
    }
}

impl DirectoryAdapter {
    /// Create an adapter over the dekontaminasi.com client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &DirectoryConfig) -> Result<Self, ApplicationError> {
        let client = DekontaminasiClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::with_client(Box::new(client)))
    }

    /// Create an adapter over any directory client
    #[must_use]
    pub fn with_client(client: Box<dyn DirectoryClient>) -> Self {
        Self { client }
    }

    fn map_error(e: &DirectoryError) -> ApplicationError {
        if e.is_retryable() {
            warn!(error = %e, "Directory temporarily unavailable");
        }
        ApplicationError::FetchFailure(e.to_string())
    }

    fn convert_entry(entry: HospitalEntry) -> DirectoryEntry {
        DirectoryEntry {
            name: entry.name,
            address: entry.address,
            region: entry.region,
            province: entry.province,
            phone: entry.phone,
        }
    }
}

#[async_trait]
impl HospitalDirectoryPort for DirectoryAdapter {
    #[instrument(skip(self))]
    async fn fetch_entries(&self) -> Result<Vec<DirectoryEntry>, ApplicationError> {
        let entries = self
            .client
            .fetch_hospitals()
            .await
            .map_err(|e| Self::map_error(&e))?;

        debug!(count = entries.len(), "Fetched directory entries");
        Ok(entries.into_iter().map(Self::convert_entry).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> DirectoryConfig {
        DirectoryConfig {
            base_url: server.uri(),
            ..DirectoryConfig::for_testing()
        }
    }

    #[tokio::test]
    async fn entries_are_converted_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/hospitals"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[{"name": "RS B", "region": "Kota Bogor"}, {"name": ""}, {"name": "RS A", "phone": "021"}]"#,
            ))
            .mount(&server)
            .await;

        let adapter = DirectoryAdapter::new(&config_for(&server)).unwrap();
        let entries = adapter.fetch_entries().await.unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].region.as_deref(), Some("Kota Bogor"));
        assert_eq!(entries[1].name.as_deref(), Some(""));
        assert_eq!(entries[2].phone.as_deref(), Some("021"));
    }

    #[tokio::test]
    async fn http_error_is_fetch_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/hospitals"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let adapter = DirectoryAdapter::new(&config_for(&server)).unwrap();
        let err = adapter.fetch_entries().await.unwrap_err();

        assert!(matches!(err, ApplicationError::FetchFailure(_)));
    }

    #[tokio::test]
    async fn unparseable_body_is_fetch_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/hospitals"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&server)
            .await;

        let adapter = DirectoryAdapter::new(&config_for(&server)).unwrap();
        let err = adapter.fetch_entries().await.unwrap_err();

        assert!(matches!(err, ApplicationError::FetchFailure(_)));
    }

    #[test]
    fn invalid_config_is_configuration_error() {
        let config = DirectoryConfig {
            base_url: String::new(),
            ..DirectoryConfig::default()
        };
        assert!(matches!(
            DirectoryAdapter::new(&config),
            Err(ApplicationError::Configuration(_))
        ));
    }
}
