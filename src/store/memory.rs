//! In-memory report store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::traits::ReportStore;
use crate::error::StorageError;
use crate::pipeline::types::CitizenReport;

/// Process-local store, kept in insertion order.
#[derive(Debug, Default)]
pub struct MemoryReportStore {
    reports: RwLock<Vec<CitizenReport>>,
}

impl MemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.reports.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.reports.read().await.is_empty()
    }
}

#[async_trait]
impl ReportStore for MemoryReportStore {
    async fn put_report(&self, report: &CitizenReport) -> Result<(), StorageError> {
        let mut reports = self.reports.write().await;
        if reports.iter().any(|r| r.id == report.id) {
            return Err(StorageError::Duplicate {
                id: report.id.clone(),
            });
        }
        reports.push(report.clone());
        debug!(report_id = %report.id, total = reports.len(), "Report stored");
        Ok(())
    }

    async fn get_report(&self, id: &str) -> Result<Option<CitizenReport>, StorageError> {
        let reports = self.reports.read().await;
        Ok(reports.iter().find(|r| r.id == id).cloned())
    }

    async fn list_reports(&self, limit: usize) -> Result<Vec<CitizenReport>, StorageError> {
        let reports = self.reports.read().await;
        Ok(reports.iter().rev().take(limit).cloned().collect())
    }
}
