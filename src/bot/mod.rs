//! Glue between the chat transport, the web and the extraction core.
//!
//! Each chat line yields at most one handled URL. Twitter and Reddit links are
//! rewritten to their mirrors; everything else is fetched and previewed.

mod runtime;

use crate::channels::{Channel, ChannelMessage};
use crate::config::{Config, RewriteConfig};
use crate::error::FetchError;
use crate::extract::text::one_line;
use crate::extract::{
    ExtractionResult, PageDocument, build_summary_input, extract_meta, trim, truncate_at_word,
};
use crate::fetch::{FetchedPage, PageFetcher};
use crate::links::rewrite::{REDDIT_HOST, TWITTER_HOST};
use crate::links::{LinkKind, NitterDirectory, classify, first_url, rewrite_host};
use crate::summarizer::{OpenAiCompletions, Summarizer, summarize};
use std::sync::Arc;

pub(crate) use runtime::spawn_supervised_listener;

/// Capacity of the queue between the listener task and the handler.
const INBOX_CAPACITY: usize = 64;

const TWEET_CONTENT_SELECTOR: &str = ".main-tweet .tweet-content";
const TWEET_PREFIX: &str = "((Content)) ";

/// What a generic page produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Previews {
    pub extraction: ExtractionResult,
    /// Prompt handed to the summarizer; empty when the page had no text.
    pub summary_input: String,
    /// Formatted `((OpenAI TL;DR)) ...` line.
    pub tldr: Option<String>,
}

impl Previews {
    /// Chat lines to send, meta first.
    pub fn replies(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(2);
        if !self.extraction.meta_message.is_empty() {
            out.push(self.extraction.meta_message.clone());
        }
        if let Some(tldr) = self.tldr.as_ref().filter(|t| !t.is_empty()) {
            out.push(tldr.clone());
        }
        out
    }
}

pub struct Bot {
    fetcher: PageFetcher,
    summarizer: Option<Arc<dyn Summarizer>>,
    nitter: NitterDirectory,
    rewrite: RewriteConfig,
}

impl Bot {
    pub fn new(config: &Config) -> Self {
        let fetcher = PageFetcher::new(&config.fetch);
        let summarizer = config.summarizer_ready().then(|| {
            Arc::new(OpenAiCompletions::new(&config.summarizer)) as Arc<dyn Summarizer>
        });
        let nitter = NitterDirectory::new(fetcher.client().clone(), &config.rewrite);
        if summarizer.is_none() {
            tracing::info!("summarizer disabled or missing API token; TL;DR replies off");
        }
        Self {
            fetcher,
            summarizer,
            nitter,
            rewrite: config.rewrite.clone(),
        }
    }

    /// Replace (or remove) the summarization backend.
    #[must_use]
    pub fn with_summarizer(mut self, summarizer: Option<Arc<dyn Summarizer>>) -> Self {
        self.summarizer = summarizer;
        self
    }

    /// Fetch a page and run the extraction core on it.
    ///
    /// Non-HTML responses give empty previews. The summarizer is only asked
    /// when the page had visible text.
    pub async fn previews(&self, url: &str) -> Result<Previews, FetchError> {
        let Some(page) = self.fetcher.fetch_html(&fetchable(url)).await? else {
            return Ok(Previews::default());
        };

        let (extraction, summary_input) = analyze(url, &page);
        tracing::info!(
            url = %url,
            host = %page.host,
            meta_chars = extraction.meta_message.chars().count(),
            input_chars = summary_input.chars().count(),
            "link.preview"
        );

        let tldr = match (&self.summarizer, summary_input.is_empty()) {
            (Some(summarizer), false) => summarize(summarizer.as_ref(), &summary_input).await,
            _ => None,
        };

        Ok(Previews {
            extraction,
            summary_input,
            tldr,
        })
    }

    /// Replies for one chat line. Only the first URL is looked at; failures
    /// are logged and produce no replies.
    pub async fn handle_message(&self, text: &str) -> Vec<String> {
        let Some(url) = first_url(text) else {
            return Vec::new();
        };

        let kind = if self.rewrite.enabled {
            classify(&url)
        } else {
            LinkKind::Generic
        };
        tracing::debug!(url = %url, ?kind, "link.detected");

        match kind {
            LinkKind::Twitter => self.tweet_replies(&url).await,
            LinkKind::Reddit => {
                vec![rewrite_host(&url, REDDIT_HOST, &self.rewrite.libreddit_host)]
            }
            LinkKind::Generic => match self.previews(&url).await {
                Ok(previews) => previews.replies(),
                Err(e) => {
                    tracing::warn!(url = %url, error = %e, "link.preview.failed");
                    Vec::new()
                }
            },
        }
    }

    /// Rewritten Nitter URL, then the tweet text when it can be read.
    async fn tweet_replies(&self, url: &str) -> Vec<String> {
        let host = self.nitter.random_host().await;
        let mirrored = rewrite_host(url, TWITTER_HOST, &host);
        let mut replies = vec![mirrored.clone()];

        match self.fetcher.fetch_page(&fetchable(&mirrored)).await {
            Ok(page) => {
                let content = tweet_text(&page.body);
                if !content.is_empty() {
                    replies.push(format!("{TWEET_PREFIX}{content}"));
                }
            }
            Err(e) => tracing::warn!(url = %mirrored, error = %e, "tweet.fetch.failed"),
        }
        replies
    }

    /// Serve `channel` until its listener gives up for good.
    pub async fn run(&self, channel: Arc<dyn Channel>) -> anyhow::Result<()> {
        let (tx, rx) = tokio::sync::mpsc::channel::<ChannelMessage>(INBOX_CAPACITY);
        let listener = spawn_supervised_listener(
            Arc::clone(&channel),
            tx,
            runtime::INITIAL_BACKOFF_SECS,
            runtime::MAX_BACKOFF_SECS,
        );
        tracing::info!(channel = channel.name(), "bot.listening");

        self.serve(channel.as_ref(), rx).await;
        listener.abort();
        Ok(())
    }

    /// Handle queued messages one at a time until the queue closes.
    pub async fn serve(
        &self,
        channel: &dyn Channel,
        mut rx: tokio::sync::mpsc::Receiver<ChannelMessage>,
    ) {
        while let Some(msg) = rx.recv().await {
            tracing::debug!(
                id = %msg.id,
                sender = %msg.sender,
                content = %truncate_at_word(&msg.content, 80, Some("...")),
                "message.in"
            );

            for reply in self.handle_message(&msg.content).await {
                if let Err(e) = channel.send(&reply, &msg.reply_to).await {
                    tracing::warn!(
                        channel = channel.name(),
                        recipient = %msg.reply_to,
                        error = %e,
                        "reply.send.failed"
                    );
                }
            }
        }
    }
}

/// Bare `www.` links are detected without a scheme.
fn fetchable(url: &str) -> String {
    if url.contains("://") {
        url.to_string()
    } else {
        format!("http://{url}")
    }
}

/// Run the extraction core. Kept synchronous so the parsed tree never lives
/// across an await point.
fn analyze(url: &str, page: &FetchedPage) -> (ExtractionResult, String) {
    let doc = PageDocument::parse(&page.body);
    let extraction = extract_meta(&page.host, &doc);
    let summary_input = build_summary_input(url, &doc, &extraction.long_meta);
    (extraction, summary_input)
}

fn tweet_text(body: &str) -> String {
    let doc = PageDocument::parse(body);
    let raw: String = doc
        .select(TWEET_CONTENT_SELECTOR)
        .into_iter()
        .map(|node| PageDocument::subtree_text(node, ""))
        .collect();
    trim(&one_line(&raw))
}
