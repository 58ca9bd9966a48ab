//! Per-file upload coordination.

use super::client::{ApiClient, NO_SESSION};
use super::error::ApiResult;
use crate::intake::CandidateFile;
use crate::models::{ErrorReport, SamplingRate, UploadOutcome};

/// Message shown when an upload fails before the server could answer.
pub const UPLOAD_FAILED: &str = "An error occurred during upload";

/// Upload one file and convert whatever happens into an outcome.
///
/// Independent of any other upload: callers fire one of these per accepted
/// file without waiting for the others. A rejection for a missing session
/// (the server restarted, or its cookie expired) reopens the session and
/// sends the file once more.
pub async fn upload(
    client: &ApiClient,
    file: &CandidateFile,
    output_prefix: &str,
    sampling_rate: SamplingRate,
) -> UploadOutcome {
    let generation = client.session_generation().await;
    let mut result = client.post_upload(file, output_prefix, sampling_rate).await;

    if lacks_session(&result) {
        tracing::warn!("Server has no session for {}, reopening", file.name);
        match client.reopen_session(generation).await {
            Ok(()) => result = client.post_upload(file, output_prefix, sampling_rate).await,
            Err(e) => tracing::error!("Could not reopen session: {}", e),
        }
    }

    match result {
        Ok(outcome) => {
            match &outcome {
                UploadOutcome::Success(receipt) => {
                    tracing::info!("Uploaded {} as {}", file.name, receipt.saved_path);
                }
                UploadOutcome::Failure(report) => {
                    tracing::warn!("Server rejected {}: {}", file.name, report.message);
                }
            }
            outcome
        }
        Err(e) => {
            tracing::error!("Upload of {} failed: {}", file.name, e);
            UploadOutcome::Failure(ErrorReport::new(UPLOAD_FAILED, Some(e.detail())))
        }
    }
}

fn lacks_session(result: &ApiResult<UploadOutcome>) -> bool {
    matches!(result, Ok(UploadOutcome::Failure(report)) if report.message == NO_SESSION)
}
