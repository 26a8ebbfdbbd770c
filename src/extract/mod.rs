pub mod document;
pub mod emoji;
pub mod meta;
pub mod summary_input;
pub mod text;

pub use document::PageDocument;
pub use emoji::strip_emoji;
pub use meta::{ExtractionResult, extract_meta};
pub use summary_input::{TLDR_CUE, build_summary_input, page_content};
pub use text::{trim, trim_last_word, truncate_at_word, url_tokens};
