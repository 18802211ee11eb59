//! Mock FineTuneService implementation for testing.

use crate::service::{
    FileId, FineTuneService, JobId, JobSnapshot, ServiceError, ServiceResult,
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Scripted service double: plays back a queue of job snapshots and records
/// every call for verification.
#[derive(Default)]
pub struct MockFineTuneService {
    statuses: VecDeque<JobSnapshot>,
    calls: Vec<MockCall>,
    upload_failure: Option<String>,
}

#[derive(Debug, Clone)]
pub enum MockCall {
    UploadDataset { path: PathBuf },
    CreateJob { file: FileId, base_model: String },
    JobStatus { job: JobId },
}

impl MockFineTuneService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the snapshots returned by successive `job_status` calls.
    pub fn with_statuses(mut self, statuses: Vec<JobSnapshot>) -> Self {
        self.statuses = statuses.into();
        self
    }

    /// Make `upload_dataset` fail with the given reason.
    pub fn with_upload_failure(mut self, reason: &str) -> Self {
        self.upload_failure = Some(reason.to_string());
        self
    }

    /// Recorded calls, in order.
    pub fn calls(&self) -> &[MockCall] {
        &self.calls
    }
}

#[async_trait]
impl FineTuneService for MockFineTuneService {
    async fn upload_dataset(&mut self, path: &Path) -> ServiceResult<FileId> {
        self.calls.push(MockCall::UploadDataset {
            path: path.to_path_buf(),
        });
        match &self.upload_failure {
            Some(reason) => Err(ServiceError::UploadFailed(reason.clone())),
            None => Ok(FileId("file-mock-001".to_string())),
        }
    }

    async fn create_job(&mut self, file: &FileId, base_model: &str) -> ServiceResult<JobId> {
        self.calls.push(MockCall::CreateJob {
            file: file.clone(),
            base_model: base_model.to_string(),
        });
        Ok(JobId("job-mock-001".to_string()))
    }

    async fn job_status(&mut self, job: &JobId) -> ServiceResult<JobSnapshot> {
        self.calls.push(MockCall::JobStatus { job: job.clone() });
        self.statuses
            .pop_front()
            .ok_or_else(|| ServiceError::NotConfigured("job_status".to_string()))
    }
}
