use crate::config::RewriteConfig;
use rand::seq::IndexedRandom;
use reqwest::Client;
use serde::Deserialize;

/// Weekly response-time ceiling (ms) for an instance to be picked.
const MAX_TIME_WEEK: u64 = 1000;

/// One entry of the public Nitter status list.
#[derive(Debug, Clone, Deserialize)]
pub struct NitterInstance {
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "timeWeek", default)]
    pub time_week: u64,
}

impl NitterInstance {
    pub fn is_healthy(&self) -> bool {
        self.status == "up" && self.time_week < MAX_TIME_WEEK
    }
}

/// Pick a random healthy instance name.
pub fn pick_instance(instances: &[NitterInstance]) -> Option<&str> {
    let healthy: Vec<&str> = instances
        .iter()
        .filter(|i| i.is_healthy())
        .map(|i| i.name.as_str())
        .collect();
    healthy.choose(&mut rand::rng()).copied()
}

/// Resolves the Nitter host to send Twitter links to.
pub struct NitterDirectory {
    client: Client,
    instances_url: String,
    fallback_host: String,
}

impl NitterDirectory {
    pub fn new(client: Client, config: &RewriteConfig) -> Self {
        Self {
            client,
            instances_url: config.nitter_instances_url.clone(),
            fallback_host: config.nitter_fallback_host.clone(),
        }
    }

    pub fn fallback_host(&self) -> &str {
        &self.fallback_host
    }

    async fn fetch_instances(&self) -> anyhow::Result<Vec<NitterInstance>> {
        let response = self.client.get(&self.instances_url).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("instance list answered with HTTP {}", response.status());
        }
        Ok(response.json().await?)
    }

    /// A random healthy instance, or the fallback host when the list is
    /// unavailable or has nothing healthy.
    pub async fn random_host(&self) -> String {
        match self.fetch_instances().await {
            Ok(instances) => {
                if let Some(name) = pick_instance(&instances) {
                    return name.to_string();
                }
                tracing::warn!(
                    total = instances.len(),
                    fallback = %self.fallback_host,
                    "no healthy nitter instance"
                );
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    fallback = %self.fallback_host,
                    "nitter instance list unavailable"
                );
            }
        }
        self.fallback_host.clone()
    }
}
