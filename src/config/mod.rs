pub mod schema;

pub use schema::{Config, FetchConfig, IrcConfig, RewriteConfig, SummarizerConfig};
