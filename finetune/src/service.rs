//! The fine-tuning service interface.
//!
//! Implemented by a vendor-specific client elsewhere and by the scripted
//! `MockFineTuneService` in tests.

use async_trait::async_trait;
use std::path::Path;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Identifier of an uploaded dataset file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileId(pub String);

/// Identifier of a fine-tune job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobId(pub String);

/// Lifecycle state of a fine-tune job. Any terminal state other than
/// `Succeeded` is fatal to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    Pending,
    Running,
    Succeeded,
    /// A terminal status other than success, carrying the raw status text.
    Failed(String),
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending | Self::Running)
    }
}

/// One poll's view of a job: its status, any events reported since the
/// previous poll, and the resulting model once available.
#[derive(Debug, Clone)]
pub struct JobSnapshot {
    pub status: JobStatus,
    pub events: Vec<String>,
    pub fine_tuned_model: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("upload failed: {0}")]
    UploadFailed(String),

    #[error("job creation failed: {0}")]
    JobCreationFailed(String),

    #[error("status poll failed: {0}")]
    PollFailed(String),

    #[error("mock response not configured for: {0}")]
    NotConfigured(String),
}

/// Core fine-tuning service interface.
#[async_trait]
pub trait FineTuneService: Send {
    /// Upload a newline-delimited-JSON dataset file.
    async fn upload_dataset(&mut self, path: &Path) -> ServiceResult<FileId>;

    /// Start a fine-tune of `base_model` on the uploaded file.
    async fn create_job(&mut self, file: &FileId, base_model: &str) -> ServiceResult<JobId>;

    /// Poll the job once.
    async fn job_status(&mut self, job: &JobId) -> ServiceResult<JobSnapshot>;
}
