//! Hospital directory integration for Vino
//!
//! Fetches the Indonesian COVID-19 referral hospital list published by
//! [dekontaminasi.com](https://dekontaminasi.com/api/id/covid19/hospitals).
//!
//! # Architecture
//!
//! [`DirectoryClient`] defines the interface, implemented by
//! [`DekontaminasiClient`]. The client performs a single GET with no
//! parameters, no authentication and no pagination, and returns the raw
//! entries in source order; name validation is left to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_directory::{DekontaminasiClient, DirectoryClient, DirectoryConfig};
//!
//! let client = DekontaminasiClient::new(&DirectoryConfig::default())?;
//! let entries = client.fetch_hospitals().await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{DekontaminasiClient, DirectoryClient};
pub use config::DirectoryConfig;
pub use error::DirectoryError;
pub use models::HospitalEntry;
