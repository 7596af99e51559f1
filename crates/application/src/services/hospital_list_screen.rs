//! Hospital list screen
//!
//! Mounting starts the single directory fetch for this screen; the query can
//! change at any time and the visible list is derived from scratch on every
//! read.

use std::fmt;
use std::sync::Arc;

use domain::HospitalRecord;

use super::directory_loader::{DirectoryLoader, LoadStatus};
use super::screen_scope::ScreenScope;
use super::search_filter::filter_hospitals;

/// Shown when the query filters out every hospital
pub const NO_MATCHES_MESSAGE: &str = "No hospitals found matching your search.";

/// State behind the hospital list view
pub struct HospitalListScreen {
    loader: Arc<DirectoryLoader>,
    scope: ScreenScope<LoadStatus>,
    query: String,
}

impl fmt::Debug for HospitalListScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HospitalListScreen")
            .field("query", &self.query)
            .field("closed", &self.scope.is_closed())
            .finish_non_exhaustive()
    }
}

impl HospitalListScreen {
    /// Create an unmounted screen
    pub fn new(loader: Arc<DirectoryLoader>) -> Self {
        Self {
            loader,
            scope: ScreenScope::new(LoadStatus::Loading),
            query: String::new(),
        }
    }

    /// Start the directory fetch for this mount
    pub fn mount(&mut self) {
        let loader = Arc::clone(&self.loader);
        self.scope.spawn(move |publisher| async move {
            publisher.publish(LoadStatus::Loading);
            let status = loader.load().await;
            publisher.publish(status);
        });
    }

    /// Wait for the fetch to finish and return its status
    pub async fn loaded(&self) -> LoadStatus {
        self.scope.settled(|status| !status.is_loading()).await
    }

    /// Current load status
    pub fn status(&self) -> LoadStatus {
        self.scope.state()
    }

    /// Replace the search query
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Current search query
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Hospitals matching the current query, in directory order
    pub fn visible(&self) -> Vec<HospitalRecord> {
        self.scope.inspect(|status| {
            filter_hospitals(status.hospitals(), &self.query)
                .into_iter()
                .cloned()
                .collect()
        })
    }

    /// Tear the screen down; an in-flight fetch is abandoned
    pub fn unmount(&mut self) {
        self.scope.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApplicationError, LOAD_FAILED_MESSAGE};
    use crate::ports::{DirectoryEntry, HospitalDirectoryPort, MockHospitalDirectoryPort};
    use async_trait::async_trait;
    use tokio::sync::Notify;

    fn entry(name: &str, region: &str) -> DirectoryEntry {
        DirectoryEntry {
            name: Some(name.to_string()),
            region: Some(region.to_string()),
            ..DirectoryEntry::default()
        }
    }

    fn screen_with(directory: MockHospitalDirectoryPort) -> HospitalListScreen {
        HospitalListScreen::new(Arc::new(DirectoryLoader::new(Arc::new(directory))))
    }

    #[tokio::test]
    async fn mount_loads_once_and_filters() {
        let mut directory = MockHospitalDirectoryPort::new();
        directory.expect_fetch_entries().times(1).returning(|| {
            Ok(vec![
                entry("RSUD Kota Bandung", "Kota Bandung"),
                entry("RS Immanuel", "Kota Bandung"),
                entry("RSUD Cibinong", "Kab. Bogor"),
            ])
        });
        let mut screen = screen_with(directory);
        assert!(screen.status().is_loading());

        screen.mount();
        let status = screen.loaded().await;
        assert_eq!(status.hospitals().len(), 3);
        assert_eq!(screen.visible().len(), 3);

        screen.set_query("bandung");
        let names: Vec<_> = screen
            .visible()
            .iter()
            .map(|h| h.name().to_string())
            .collect();
        assert_eq!(names, ["RSUD Kota Bandung", "RS Immanuel"]);

        screen.set_query("");
        assert_eq!(screen.visible().len(), 3);
    }

    #[tokio::test]
    async fn failed_load_shows_message_and_empty_list() {
        let mut directory = MockHospitalDirectoryPort::new();
        directory
            .expect_fetch_entries()
            .returning(|| Err(ApplicationError::FetchFailure("connection refused".to_string())));
        let mut screen = screen_with(directory);

        screen.mount();
        let status = screen.loaded().await;

        assert_eq!(status.error(), Some(LOAD_FAILED_MESSAGE));
        assert!(screen.visible().is_empty());
    }

    /// Directory that blocks until released
    struct SlowDirectory {
        release: Arc<Notify>,
    }

    #[async_trait]
    impl HospitalDirectoryPort for SlowDirectory {
        async fn fetch_entries(&self) -> Result<Vec<DirectoryEntry>, ApplicationError> {
            self.release.notified().await;
            Ok(vec![DirectoryEntry::named("RS Late")])
        }
    }

    #[tokio::test]
    async fn unmount_discards_late_response() {
        let release = Arc::new(Notify::new());
        let loader = DirectoryLoader::new(Arc::new(SlowDirectory {
            release: Arc::clone(&release),
        }));
        let mut screen = HospitalListScreen::new(Arc::new(loader));

        screen.mount();
        screen.unmount();
        release.notify_waiters();
        tokio::task::yield_now().await;

        assert!(screen.status().is_loading());
        assert!(screen.visible().is_empty());
        assert!(screen.loaded().await.is_loading());
    }
}
