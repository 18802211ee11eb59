//! Fixed-interval polling loop around a [`FineTuneService`].

use crate::service::{FineTuneService, JobStatus};
use serde::Serialize;
use std::path::Path;
use std::time::Duration;

/// Outcome of a successful fine-tune run.
#[derive(Debug, Clone, Serialize)]
pub struct FineTuneSummary {
    pub name: String,
    pub base_model: String,
    pub fine_tuned_model: String,
    pub events: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum FineTuneError {
    #[error(transparent)]
    Service(#[from] crate::service::ServiceError),

    #[error("unexpected terminal status: {0}")]
    UnexpectedStatus(String),

    #[error("job succeeded without a fine-tuned model id")]
    MissingModel,
}

/// Upload the dataset, start the job, and poll at `poll_interval` until the
/// job reaches a terminal state. Any terminal state other than success is an
/// error. The sleep between polls is not cancellable mid-poll.
pub async fn run_fine_tune<S: FineTuneService>(
    service: &mut S,
    dataset_path: &Path,
    name: &str,
    base_model: &str,
    poll_interval: Duration,
) -> Result<FineTuneSummary, FineTuneError> {
    let file = service.upload_dataset(dataset_path).await?;
    tracing::info!(name, file = %file.0, "dataset uploaded");
    let job = service.create_job(&file, base_model).await?;
    tracing::info!(name, job = %job.0, base_model, "fine-tune job created");

    let mut events = Vec::new();
    loop {
        let snapshot = service.job_status(&job).await?;
        events.extend(snapshot.events);
        match snapshot.status {
            JobStatus::Pending | JobStatus::Running => {
                tracing::info!(name, status = ?snapshot.status, "fine-tune in progress");
                tokio::time::sleep(poll_interval).await;
            }
            JobStatus::Succeeded => {
                let fine_tuned_model =
                    snapshot.fine_tuned_model.ok_or(FineTuneError::MissingModel)?;
                tracing::info!(name, model = %fine_tuned_model, "fine-tune succeeded");
                return Ok(FineTuneSummary {
                    name: name.to_string(),
                    base_model: base_model.to_string(),
                    fine_tuned_model,
                    events,
                });
            }
            JobStatus::Failed(raw) => {
                tracing::warn!(name, status = %raw, "fine-tune reached a failed terminal state");
                return Err(FineTuneError::UnexpectedStatus(raw));
            }
        }
    }
}
