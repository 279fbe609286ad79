//! # contract: interfaces for the directory service and the artifact store
//!
//! This module defines the two trait seams the pipeline is built against, plus
//! the plain data types they exchange:
//!
//! - [`Directory`]: read-only lookups against the remote RMM service: list a
//!   device group's ids, fetch one device, fetch one organization.
//! - [`Publisher`]: write one named object's bytes into the configured bucket.
//!
//! ## Interface & Extensibility
//! - Implement [`Directory`] for new RMM backends, [`Publisher`] for new
//!   storage targets (object store, local file, test double).
//! - All methods are async, returning results with boxed error types.
//! - Meant for both production code and robust mocking in tests.
//!
//! ## Mocking & Testing
//! - Both traits are annotated for `mockall`, so consumers can generate
//!   deterministic mocks for unit/integration tests (`MockDirectory`,
//!   `MockPublisher`; exported under the `test-export-mocks` feature).

use async_trait::async_trait;

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;

/// Error type for [`Directory`] lookups (simple boxed error).
pub type DirectoryError = Box<dyn std::error::Error + Send + Sync>;

/// Error type for [`Publisher`] writes (simple boxed error).
pub type PublishError = Box<dyn std::error::Error + Send + Sync>;

/// One managed endpoint as returned by the directory service.
///
/// Only the attributes the report consumes are modelled. `id` and the `os`
/// sub-structure are genuinely optional on the wire; the remaining required
/// fields make an incomplete payload a decode failure at the client boundary.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: Option<String>,
    pub dns_name: String,
    /// Node role/class, e.g. `SERVER` or `WORKSTATION`.
    pub node_class: String,
    pub os: Option<OsInfo>,
    pub last_logged_in_user: Option<String>,
    pub organization_id: String,
}

/// Operating-system attributes nested inside a [`Device`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OsInfo {
    pub name: Option<String>,
    pub needs_reboot: Option<bool>,
}

/// An owning organization as returned by the directory service.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub name: String,
}

/// Trait for read-only lookups against the remote device directory.
/// The implementor is responsible for transport, authentication and decoding.
///
/// The trait is implemented by the real HTTP client and by test mocks.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait Directory: Send + Sync {
    /// List the device ids belonging to the named device group.
    async fn list_group_device_ids(&self, group_id: &str)
        -> Result<Vec<String>, DirectoryError>;

    /// Fetch a single device's attributes by id.
    async fn get_device(&self, device_id: &str) -> Result<Device, DirectoryError>;

    /// Fetch an organization's attributes by id.
    async fn get_organization(&self, organization_id: &str)
        -> Result<Organization, DirectoryError>;
}

/// Trait for writing one named object into the configured bucket.
///
/// The implementor holds the destination (bucket, directory, ...) so callers
/// only supply the object key and the bytes.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Write `body` under `key`. Overwrites any existing object.
    async fn put_object(&self, key: &str, body: Vec<u8>) -> Result<(), PublishError>;
}
