//! Persistence layer for citizen reports.

pub mod memory;
pub mod traits;

pub use memory::MemoryReportStore;
pub use traits::ReportStore;
