//! Inbound SMS interpretation pipeline.
//!
//! Every citizen text flows through:
//! 1. `normalize()` — lower-cased copy for matching
//! 2. `AddressExtractor::extract()` — ordered pattern rules, `"Unknown"` fallback
//! 3. `IssueClassifier::classify()` — ordered keyword table, `other` fallback
//! 4. `ReportAssembler::assemble()` — immutable `CitizenReport`
//!
//! `ReportProcessor` wraps the pipeline with validation, storage and
//! notification. The pipeline itself does no I/O.

pub mod address;
pub mod assembler;
pub mod classifier;
pub mod normalize;
pub mod processor;
pub mod types;

pub use address::AddressExtractor;
pub use assembler::{Clock, IdGenerator, ReportAssembler, SystemClock, UuidGenerator};
pub use classifier::IssueClassifier;
pub use processor::ReportProcessor;
pub use types::{CitizenReport, InboundMessage, IssueType, ParsedMessage, ReportStatus};
