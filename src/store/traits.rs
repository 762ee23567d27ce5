//! `ReportStore` trait — the single persistence seam for citizen reports.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::pipeline::types::CitizenReport;

/// Backend-agnostic report storage.
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Write a newly assembled report. Fails if the id is already taken.
    async fn put_report(&self, report: &CitizenReport) -> Result<(), StorageError>;

    /// Get a report by id.
    async fn get_report(&self, id: &str) -> Result<Option<CitizenReport>, StorageError>;

    /// Reports, most recently stored first, up to `limit`.
    async fn list_reports(&self, limit: usize) -> Result<Vec<CitizenReport>, StorageError>;
}
