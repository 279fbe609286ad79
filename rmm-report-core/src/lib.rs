#![doc = "rmm-report-core: core logic library for rmm-report."]

//! This crate contains all business logic for the device report job: the
//! directory and publisher abstractions, the report builder, and the
//! fetch-transform-upload pipeline. Credential loading, CLI glue and the
//! concrete object-storage client live in the `rmm-report` binary crate.
//!
//! # Usage
//! Add this as a dependency for shared pipeline, report and contract code.

pub mod contract;
pub mod directory;
pub mod pipeline;
pub mod report;
