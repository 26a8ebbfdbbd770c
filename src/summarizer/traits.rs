use crate::error::SummarizerError;
use async_trait::async_trait;

/// Text-completion backend turning a prompt into a TL;DR.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Human-readable backend name, used in reply prefixes and logs
    fn name(&self) -> &str;

    /// Complete `prompt` and return the raw completion text.
    async fn complete(&self, prompt: &str) -> Result<String, SummarizerError>;
}
