//! Dataset persistence and the fine-tuning service boundary.
//!
//! The remote fine-tuning vendor is a consumed interface only: this crate
//! defines the [`FineTuneService`] trait, a polling runner generic over it,
//! and JSONL persistence for generated datasets. A scripted mock stands in
//! for the real service in tests (and behind the `mock` feature).

pub mod dataset;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod runner;
pub mod service;

pub use dataset::{read_jsonl, write_jsonl, DatasetError};
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockCall, MockFineTuneService};
pub use runner::{run_fine_tune, FineTuneError, FineTuneSummary};
pub use service::{FileId, FineTuneService, JobId, JobSnapshot, JobStatus, ServiceError};
