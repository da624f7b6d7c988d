// src/main.rs
use anyhow::{Context, Result};
use log::{error, info};

mod episode;
mod pub_date;
mod rss_write;

use rss_write::FeedConfig;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // A bad run is reported, never an unhandled fault.
    if let Err(e) = run() {
        error!("RSS generation failed: {e:#}");
    }
}

fn run() -> Result<()> {
    // Paths are overridable via ENV, same defaults as the hot-list workflow.
    let input = std::env::var("HOT_JSON").unwrap_or_else(|_| "hot_episodes.json".into());
    let output = std::env::var("RSS_OUT").unwrap_or_else(|_| "hot_episodes_feed.xml".into());

    let raw = std::fs::read_to_string(&input)
        .with_context(|| format!("cannot read episodes file '{input}'"))?;
    let episodes = episode::extract_episodes(&raw)
        .with_context(|| format!("'{input}' is not valid JSON"))?;
    info!("loaded {} episodes from {input}", episodes.len());

    if rss_write::write_feed(&episodes, &FeedConfig::default(), &output)? {
        info!("RSS feed written to {output}");
    }
    Ok(())
}
