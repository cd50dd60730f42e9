use crate::services::extractor::{self, ExtractionError};
use crate::services::prompts;
use crate::services::providers::{ChatProvider, ProviderError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Generation(#[from] ProviderError),
}

/// Extract the document's text and ask the generation API for a summary.
///
/// The summary completion is unbounded; the API's own default output limit
/// applies.
pub async fn summarize_document(
    bytes: &[u8],
    provider: &dyn ChatProvider,
) -> Result<String, SummarizeError> {
    let text = extractor::extract_text_flat(bytes)?;
    let prompt = prompts::build_summary_prompt(&text);

    let summary = provider
        .complete(prompts::SUMMARY_SYSTEM_PROMPT, &prompt, None)
        .await?;

    Ok(summary)
}
