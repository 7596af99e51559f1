//! Directory loader
//!
//! Fetches the hospital directory once and publishes it as a [`LoadStatus`].

use std::fmt;
use std::sync::Arc;

use domain::HospitalRecord;
use tracing::{debug, error, info, instrument};

use crate::ports::{DirectoryEntry, HospitalDirectoryPort};

/// Load state of the directory for one screen mount
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Fetch in flight
    Loading,
    /// Fetch failed; carries the user-facing message
    Error(String),
    /// Cleaned directory, in source order
    Ready(Vec<HospitalRecord>),
}

impl LoadStatus {
    /// Whether the fetch is still in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded hospitals; empty unless ready
    #[must_use]
    pub fn hospitals(&self) -> &[HospitalRecord] {
        match self {
            Self::Ready(hospitals) => hospitals,
            Self::Loading | Self::Error(_) => &[],
        }
    }

    /// Error message, if the fetch failed
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            Self::Loading | Self::Ready(_) => None,
        }
    }
}

/// Drop entries whose name is missing or blank, keeping source order
pub fn retain_named(entries: Vec<DirectoryEntry>) -> Vec<HospitalRecord> {
    entries
        .into_iter()
        .filter_map(DirectoryEntry::into_record)
        .collect()
}

/// Loads the hospital directory through a [`HospitalDirectoryPort`]
pub struct DirectoryLoader {
    directory: Arc<dyn HospitalDirectoryPort>,
}

impl fmt::Debug for DirectoryLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectoryLoader").finish_non_exhaustive()
    }
}

impl DirectoryLoader {
    /// Create a loader over the given directory port
    pub fn new(directory: Arc<dyn HospitalDirectoryPort>) -> Self {
        Self { directory }
    }

    /// Fetch once and produce the terminal status
    ///
    /// Never returns [`LoadStatus::Loading`]. No retry is attempted.
    #[instrument(skip(self))]
    pub async fn load(&self) -> LoadStatus {
        match self.directory.fetch_entries().await {
            Ok(entries) => {
                let total = entries.len();
                let hospitals = retain_named(entries);
                let dropped = total - hospitals.len();
                if dropped > 0 {
                    debug!(dropped, "Dropped directory entries without a name");
                }
                info!(count = hospitals.len(), "Hospital directory loaded");
                LoadStatus::Ready(hospitals)
            },
            Err(e) => {
                error!(error = %e, "Failed to fetch hospitals");
                LoadStatus::Error(e.user_message())
            },
        }
    }
}
