pub mod openai;
pub mod traits;
mod types;

pub use openai::OpenAiCompletions;
pub use traits::Summarizer;

use crate::extract::{trim, truncate_at_word};
use regex::Regex;
use std::sync::LazyLock;

const MAX_API_ERROR_CHARS: usize = 200;

static SECRET_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(sk-|Bearer )[A-Za-z0-9_\-.]+").expect("static regex"));

/// Scrub API keys from an error body and cap its length.
pub fn sanitize_api_error(input: &str) -> String {
    let scrubbed = SECRET_TOKEN.replace_all(input, "[REDACTED]");
    match scrubbed.char_indices().nth(MAX_API_ERROR_CHARS) {
        Some((idx, _)) => format!("{}...", &scrubbed[..idx]),
        None => scrubbed.into_owned(),
    }
}

/// Ask `summarizer` for a TL;DR of `input` and format the reply line.
///
/// Failures are logged and yield `None`; an empty completion does too.
pub async fn summarize(summarizer: &dyn Summarizer, input: &str) -> Option<String> {
    match summarizer.complete(input).await {
        Ok(completion) => {
            let tldr = trim(&completion);
            if tldr.is_empty() {
                tracing::debug!(backend = summarizer.name(), "empty completion");
                None
            } else {
                Some(format!("(({} TL;DR)) {tldr}", summarizer.name()))
            }
        }
        Err(e) => {
            tracing::warn!(
                backend = summarizer.name(),
                error = %e,
                prompt = %truncate_at_word(input, 80, Some("...")),
                "summarization failed"
            );
            None
        }
    }
}
