use crate::cli::{Cli, Commands};
use anyhow::{Context, Result};
use flook::bot::Bot;
use flook::channels::{Channel, IrcChannel};
use flook::config::Config;
use flook::extract::{PageDocument, build_summary_input, extract_meta};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

async fn run_bot(config: &Config) -> Result<()> {
    config.validate()?;
    info!(
        server = %config.irc.server,
        port = config.irc.port,
        channels = ?config.irc.channels,
        "starting flook"
    );

    let channel: Arc<dyn Channel> = Arc::new(IrcChannel::from_config(&config.irc));
    Bot::new(config).run(channel).await
}

async fn preview(config: &Config, url: &str, summarize: bool) -> Result<()> {
    let mut bot = Bot::new(config);
    if !summarize {
        bot = bot.with_summarizer(None);
    }
    let previews = bot.previews(url).await?;

    if previews.extraction.meta_message.is_empty() && previews.summary_input.is_empty() {
        println!("(no HTML preview for {url})");
        return Ok(());
    }
    println!("{}", previews.extraction.meta_message);
    println!();
    println!("{}", previews.summary_input);
    if summarize {
        println!();
        println!(
            "{}",
            previews.tldr.as_deref().unwrap_or("(no summary produced)")
        );
    }
    Ok(())
}

fn extract(file: &Path, host: &str, url: Option<&str>) -> Result<()> {
    let html = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let url = url.map_or_else(|| format!("https://{host}/"), str::to_string);

    let doc = PageDocument::parse(&html);
    let extraction = extract_meta(host, &doc);
    let input = build_summary_input(&url, &doc, &extraction.long_meta);

    println!("{}", extraction.meta_message);
    println!();
    println!("{input}");
    Ok(())
}

pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command() {
        Commands::Extract { file, host, url } => extract(&file, &host, url.as_deref()),
        Commands::Preview { url, summarize } => {
            let config = Config::load(cli.config.as_deref())?;
            preview(&config, &url, summarize).await
        }
        Commands::Run => {
            let config = Config::load(cli.config.as_deref())?;
            run_bot(&config).await
        }
    }
}
