use crate::channels::{Channel, ChannelMessage};
use std::sync::Arc;
use std::time::Duration;

pub(crate) const INITIAL_BACKOFF_SECS: u64 = 2;
pub(crate) const MAX_BACKOFF_SECS: u64 = 60;

/// Keep `ch.listen` running, reconnecting with exponential backoff.
///
/// Stops once every receiver of `tx` is gone.
pub(crate) fn spawn_supervised_listener(
    ch: Arc<dyn Channel>,
    tx: tokio::sync::mpsc::Sender<ChannelMessage>,
    initial_backoff_secs: u64,
    max_backoff_secs: u64,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let component = format!("channel:{}", ch.name());
        let mut backoff = initial_backoff_secs.max(1);
        let max_backoff = max_backoff_secs.max(backoff);

        loop {
            tracing::debug!(component, "channel listener starting");
            let result = ch.listen(tx.clone()).await;

            if tx.is_closed() {
                break;
            }

            match result {
                Ok(()) => {
                    tracing::warn!(component, "channel listener exited; restarting");
                    backoff = initial_backoff_secs.max(1);
                }
                Err(e) => {
                    tracing::error!(component, error = %e, backoff_secs = backoff, "channel listener failed; restarting");
                }
            }

            tokio::time::sleep(Duration::from_secs(backoff)).await;
            // Doubled after sleeping so the first failure waits the initial backoff.
            backoff = backoff.saturating_mul(2).min(max_backoff);
        }
    })
}
