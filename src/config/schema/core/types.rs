use super::super::{FetchConfig, IrcConfig, RewriteConfig, SummarizerConfig};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path the config was read from - not serialized
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    #[serde(default)]
    pub irc: IrcConfig,

    #[serde(default)]
    pub summarizer: SummarizerConfig,

    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub rewrite: RewriteConfig,
}

impl Config {
    /// Check what the IRC bot needs before it connects.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.irc.server.trim().is_empty() {
            return Err(ConfigError::Validation(
                "irc.server is empty (set IRC_SERVER or [irc].server)".into(),
            ));
        }
        if self.irc.nickname.trim().is_empty() {
            return Err(ConfigError::Validation("irc.nickname is empty".into()));
        }
        if self.irc.channels.iter().all(|c| c.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "no IRC channel to join (set IRC_CHANNEL or [irc].channels)".into(),
            ));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "fetch.timeout_secs must be positive".into(),
            ));
        }
        if !(0.0..=2.0).contains(&self.summarizer.temperature) {
            return Err(ConfigError::Validation(format!(
                "summarizer.temperature {} is outside 0.0..=2.0",
                self.summarizer.temperature
            )));
        }
        Ok(())
    }

    /// Whether TL;DR replies can be produced at all.
    pub fn summarizer_ready(&self) -> bool {
        self.summarizer.enabled
            && self
                .summarizer
                .api_token
                .as_deref()
                .is_some_and(|t| !t.trim().is_empty())
    }
}
