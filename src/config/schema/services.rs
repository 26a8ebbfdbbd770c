use serde::{Deserialize, Serialize};

/// Text-completion backend used for TL;DR replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_summarizer_base_url")]
    pub base_url: String,
    /// Completions engine, e.g. `text-davinci-003`
    #[serde(default = "default_summarizer_instance")]
    pub instance: String,
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default = "default_summarizer_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_summarizer_temperature")]
    pub temperature: f64,
    #[serde(default = "default_summarizer_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_true() -> bool {
    true
}

fn default_summarizer_base_url() -> String {
    "https://api.openai.com".into()
}

fn default_summarizer_instance() -> String {
    "text-davinci-003".into()
}

fn default_summarizer_max_tokens() -> u32 {
    120
}

fn default_summarizer_temperature() -> f64 {
    0.3
}

fn default_summarizer_timeout_secs() -> u64 {
    30
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: default_summarizer_base_url(),
            instance: default_summarizer_instance(),
            api_token: None,
            max_tokens: default_summarizer_max_tokens(),
            temperature: default_summarizer_temperature(),
            timeout_secs: default_summarizer_timeout_secs(),
        }
    }
}

/// Page fetching for previews.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    #[serde(default = "default_fetch_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_fetch_max_idle_per_host")]
    pub max_idle_per_host: usize,
    #[serde(default = "default_fetch_idle_timeout_secs")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_fetch_max_redirects")]
    pub max_redirects: usize,
    #[serde(default = "default_fetch_user_agent")]
    pub user_agent: String,
}

fn default_fetch_timeout_secs() -> u64 {
    5
}

fn default_fetch_max_idle_per_host() -> usize {
    10
}

fn default_fetch_idle_timeout_secs() -> u64 {
    30
}

fn default_fetch_max_redirects() -> usize {
    10
}

fn default_fetch_user_agent() -> String {
    concat!("flook/", env!("CARGO_PKG_VERSION")).into()
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_fetch_timeout_secs(),
            max_idle_per_host: default_fetch_max_idle_per_host(),
            idle_timeout_secs: default_fetch_idle_timeout_secs(),
            max_redirects: default_fetch_max_redirects(),
            user_agent: default_fetch_user_agent(),
        }
    }
}

/// Mirror rewrites for Twitter and Reddit links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_libreddit_host")]
    pub libreddit_host: String,
    #[serde(default = "default_nitter_instances_url")]
    pub nitter_instances_url: String,
    #[serde(default = "default_nitter_fallback_host")]
    pub nitter_fallback_host: String,
}

fn default_libreddit_host() -> String {
    "libreddit.hu".into()
}

fn default_nitter_instances_url() -> String {
    "https://raw.githubusercontent.com/xnaas/nitter-instances/master/history/summary.json".into()
}

fn default_nitter_fallback_host() -> String {
    "nitter.hu".into()
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            libreddit_host: default_libreddit_host(),
            nitter_instances_url: default_nitter_instances_url(),
            nitter_fallback_host: default_nitter_fallback_host(),
        }
    }
}
