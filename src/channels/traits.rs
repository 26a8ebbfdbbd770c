use async_trait::async_trait;

/// A chat line received from a channel.
#[derive(Debug, Clone)]
pub struct ChannelMessage {
    pub id: String,
    /// Nickname of the author.
    pub sender: String,
    /// Where replies go: the channel for channel messages, the author for DMs.
    pub reply_to: String,
    pub content: String,
    pub channel: String,
    pub timestamp: u64,
}

/// Chat transport the bot listens on and replies through.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Human-readable channel name
    fn name(&self) -> &str;

    /// Send a message through this channel
    async fn send(&self, message: &str, recipient: &str) -> anyhow::Result<()>;

    /// Start listening for incoming messages (long-running)
    async fn listen(&self, tx: tokio::sync::mpsc::Sender<ChannelMessage>) -> anyhow::Result<()>;

    fn max_message_length(&self) -> usize {
        usize::MAX
    }
}
