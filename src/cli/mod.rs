use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `flook` - IRC link-preview bot.
#[derive(Parser, Debug)]
#[command(name = "flook")]
#[command(version)]
#[command(about = "Posts page titles, mirror links and TL;DR summaries for URLs seen on IRC.", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.flook/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Connect to IRC and preview links (default)
    Run,

    /// Fetch one URL and print what the bot would say
    Preview {
        url: String,

        /// Also ask the summarizer for a TL;DR
        #[arg(long)]
        summarize: bool,
    },

    /// Run the extractor on a saved HTML file
    Extract {
        file: PathBuf,

        /// Host shown in the meta line
        #[arg(long)]
        host: String,

        /// URL used for keyword tokens (default: https://<host>/)
        #[arg(long)]
        url: Option<String>,
    },
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run)
    }
}
