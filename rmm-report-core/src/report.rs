//! Report builder: turns a device group into an in-memory CSV document.
//!
//! The builder lists the group, fetches each device in listing order, enriches
//! it with its organization's display name and flattens the result into
//! [`ReportRow`]s. Organization lookups are memoized per invocation, keyed by
//! organization id. The document is built wholly in memory and never partially
//! written: the first failed lookup aborts the whole report.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use tracing::{debug, error, info};

use crate::contract::{Device, Directory, DirectoryError, PublishError};

/// Column order of the report. Every row matches this header exactly.
pub const REPORT_HEADER: [&str; 8] = [
    "organization",
    "dns_name",
    "role",
    "device_id",
    "os_name",
    "needs_reboot",
    "last_user",
    "device_link",
];

/// One flattened, CSV-ready device record. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ReportRow {
    pub organization: String,
    pub dns_name: String,
    pub role: String,
    pub device_id: String,
    pub os_name: String,
    pub needs_reboot: String,
    pub last_user: String,
    pub device_link: String,
}

impl ReportRow {
    /// Flatten one device plus its resolved organization name.
    ///
    /// Absent optional attributes render as empty fields, except the OS
    /// sub-structure: a device without one fails the whole report.
    pub fn from_device(device: &Device, organization: String) -> Result<Self, ReportError> {
        let os = device.os.as_ref().ok_or_else(|| ReportError::MissingOs {
            device_id: device.id.clone().unwrap_or_default(),
        })?;

        Ok(ReportRow {
            organization,
            dns_name: device.dns_name.clone(),
            role: device.node_class.clone(),
            device_id: device.id.clone().unwrap_or_default(),
            os_name: os.name.clone().unwrap_or_default(),
            needs_reboot: fmt_flag(os.needs_reboot),
            last_user: device.last_logged_in_user.clone().unwrap_or_default(),
            device_link: device_dashboard_url(device.id.as_deref()),
        })
    }
}

/// Dashboard URL for a device id; the literal `Error` stands in when the
/// directory returned a device without an id.
pub fn device_dashboard_url(device_id: Option<&str>) -> String {
    format!(
        "https://app.ninjarmm.com/#/deviceDashboard/{}/overview",
        device_id.unwrap_or("Error")
    )
}

// Report consumers expect the capitalised True/False spelling in this column.
fn fmt_flag(flag: Option<bool>) -> String {
    match flag {
        Some(true) => "True",
        Some(false) => "False",
        None => "",
    }
    .to_string()
}

/// Errors from building or publishing the report.
#[derive(Debug)]
pub enum ReportError {
    /// A directory lookup (group, device or organization) failed.
    Directory(DirectoryError),
    /// A device carried no OS sub-structure.
    MissingOs { device_id: String },
    /// CSV serialisation failed.
    Csv(csv::Error),
    /// The document was built but could not be decoded as UTF-8.
    Encoding(std::string::FromUtf8Error),
    /// The upload of the finished report failed.
    Publish(PublishError),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Directory(e) => write!(f, "directory lookup failed: {e}"),
            ReportError::MissingOs { device_id } => {
                write!(f, "device {device_id:?} has no os attributes")
            }
            ReportError::Csv(e) => write!(f, "csv serialisation failed: {e}"),
            ReportError::Encoding(e) => write!(f, "report is not valid utf-8: {e}"),
            ReportError::Publish(e) => write!(f, "report upload failed: {e}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Directory(e) => Some(e.as_ref()),
            ReportError::MissingOs { .. } => None,
            ReportError::Csv(e) => Some(e),
            ReportError::Encoding(e) => Some(e),
            ReportError::Publish(e) => Some(e.as_ref()),
        }
    }
}

impl From<csv::Error> for ReportError {
    fn from(e: csv::Error) -> Self {
        ReportError::Csv(e)
    }
}

/// Build the complete CSV document for `group_id`: header row plus one data
/// row per device, in directory listing order. An empty group yields a
/// header-only document.
pub async fn build_report<D>(directory: &D, group_id: &str) -> Result<String, ReportError>
where
    D: Directory + ?Sized,
{
    let device_ids = directory
        .list_group_device_ids(group_id)
        .await
        .map_err(|e| {
            error!(group_id, error = %e, "Failed to list device group");
            ReportError::Directory(e)
        })?;
    info!(group_id, devices = device_ids.len(), "Building report for device group");

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(REPORT_HEADER)?;

    // One organization lookup per distinct organization id per invocation.
    let mut org_names: HashMap<String, String> = HashMap::new();

    for device_id in &device_ids {
        let device = directory.get_device(device_id).await.map_err(|e| {
            error!(device_id = %device_id, error = %e, "Failed to fetch device");
            ReportError::Directory(e)
        })?;

        let organization = match org_names.entry(device.organization_id.clone()) {
            Entry::Occupied(entry) => entry.get().clone(),
            Entry::Vacant(entry) => {
                let organization = directory
                    .get_organization(&device.organization_id)
                    .await
                    .map_err(|e| {
                        error!(
                            organization_id = %device.organization_id,
                            error = %e,
                            "Failed to fetch organization"
                        );
                        ReportError::Directory(e)
                    })?;
                entry.insert(organization.name).clone()
            }
        };

        let row = ReportRow::from_device(&device, organization)?;
        debug!(device_id = %device_id, dns_name = %row.dns_name, "Flattened device into report row");
        writer.serialize(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::Csv(e.into_error().into()))?;
    let document = String::from_utf8(bytes).map_err(ReportError::Encoding)?;
    info!(
        group_id,
        rows = device_ids.len(),
        bytes = document.len(),
        "Report document built"
    );
    Ok(document)
}
