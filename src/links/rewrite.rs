pub const TWITTER_HOST: &str = "twitter.com";
pub const REDDIT_HOST: &str = "reddit.com";

/// How the bot treats a detected URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Rewritten to a Nitter instance, tweet text quoted back.
    Twitter,
    /// Rewritten to the Libreddit mirror.
    Reddit,
    /// Fetched and previewed.
    Generic,
}

pub fn classify(url: &str) -> LinkKind {
    if url.contains("twitter.com/") {
        LinkKind::Twitter
    } else if url.contains("reddit.com/") {
        LinkKind::Reddit
    } else {
        LinkKind::Generic
    }
}

/// Replace every occurrence of `from` in `url` with `to`.
pub fn rewrite_host(url: &str, from: &str, to: &str) -> String {
    url.replace(from, to)
}
