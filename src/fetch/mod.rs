pub mod client;
pub mod types;

pub use client::{PageFetcher, build_http_client, is_html};
pub use types::FetchedPage;
