use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(super) struct CompletionRequest<'a> {
    pub(super) prompt: &'a str,
    pub(super) temperature: f64,
    pub(super) max_tokens: u32,
    pub(super) top_p: f64,
    pub(super) frequency_penalty: f64,
    pub(super) presence_penalty: f64,
}

#[derive(Debug, Deserialize)]
pub(super) struct CompletionResponse {
    #[serde(default)]
    pub(super) choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Choice {
    #[serde(default)]
    pub(super) text: String,
}
