mod channels;
mod core;
mod services;

pub use self::core::Config;
pub use channels::IrcConfig;
pub use services::{FetchConfig, RewriteConfig, SummarizerConfig};
