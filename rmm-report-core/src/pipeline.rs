//! High-level pipeline: orchestrates fetch → transform → upload for one run.
//!
//! [`run`] builds the CSV document via [`build_report`], derives the object
//! key from the invocation timestamp and hands the bytes to the configured
//! [`Publisher`]. There is no retry or partial-upload cleanup: the first
//! failed step aborts the invocation.
//!
//! # Callable From
//! - The CLI crate and integration tests; expects concrete (async)
//!   [`Directory`] and [`Publisher`] implementations.

use chrono::{DateTime, Utc};
use tracing::{error, info};

use crate::contract::{Directory, Publisher};
use crate::report::{build_report, ReportError};

/// Fixed acknowledgement body returned on success.
pub const SUCCESS_BODY: &str = "Mission complete!";

/// Outcome handed back to the invoking host: a numeric status code and a
/// human-readable body.
#[derive(Debug, Clone, serde::Serialize)]
pub struct InvocationResponse {
    pub status_code: u16,
    pub body: String,
}

/// Object key for a run started at `now`: the timestamp's string form with a
/// `.csv` suffix.
pub fn object_key(now: DateTime<Utc>) -> String {
    format!("{}.csv", now.format("%Y-%m-%d %H:%M:%S%.6f"))
}

/// Run the full pipeline once: build the report for `group_id` and publish it
/// under a key derived from `now`.
pub async fn run<D, P>(
    directory: &D,
    publisher: &P,
    group_id: &str,
    now: DateTime<Utc>,
) -> Result<InvocationResponse, ReportError>
where
    D: Directory + ?Sized,
    P: Publisher + ?Sized,
{
    info!(group_id, "Starting report pipeline");

    let document = build_report(directory, group_id).await?;

    let key = object_key(now);
    publisher
        .put_object(&key, document.into_bytes())
        .await
        .map_err(|e| {
            error!(key = %key, error = %e, "Failed to publish report");
            ReportError::Publish(e)
        })?;
    info!(key = %key, "Report published");

    Ok(InvocationResponse {
        status_code: 200,
        body: SUCCESS_BODY.to_string(),
    })
}
