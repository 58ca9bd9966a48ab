//! Generation coordination.

use super::client::{ApiClient, NO_SESSION};
use crate::models::{ErrorReport, GenerationOutcome, SamplingRate};

/// Message shown when generation fails before the server could answer.
pub const GENERATE_FAILED: &str = "An error occurred during generation";

/// Ask the server to generate headers for every raw file of the session.
///
/// A rejection for a missing session is reported as is, but a new session is
/// opened so the next batch of uploads is accepted. Generation is not retried
/// because the new session holds no uploads.
pub async fn generate(
    client: &ApiClient,
    output_prefix: &str,
    sampling_rate: SamplingRate,
) -> GenerationOutcome {
    let generation = client.session_generation().await;
    match client.post_generate(output_prefix, sampling_rate).await {
        Ok(outcome) => {
            match &outcome {
                GenerationOutcome::Success(items) => {
                    tracing::info!("Generated {} result(s) for {}", items.len(), output_prefix);
                }
                GenerationOutcome::Failure(report) => {
                    tracing::warn!("Generation rejected: {}", report.message);
                    if report.message == NO_SESSION {
                        if let Err(e) = client.reopen_session(generation).await {
                            tracing::error!("Could not reopen session: {}", e);
                        }
                    }
                }
            }
            outcome
        }
        Err(e) => {
            tracing::error!("Generation failed: {}", e);
            GenerationOutcome::Failure(ErrorReport::new(GENERATE_FAILED, Some(e.detail())))
        }
    }
}
