pub mod detector;
pub mod nitter;
pub mod rewrite;

pub use detector::{detect_urls, first_url, strip_reply_quote};
pub use nitter::{NitterDirectory, NitterInstance, pick_instance};
pub use rewrite::{LinkKind, classify, rewrite_host};
