// src/rss_write.rs
use std::fs::File;
use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use log::warn;
use rss::extension::itunes::{ITunesChannelExtensionBuilder, ITunesItemExtensionBuilder};
use rss::{ChannelBuilder, EnclosureBuilder, GuidBuilder, ItemBuilder};

use crate::episode::EpisodeRecord;
use crate::pub_date;

/// Static channel envelope, never derived from input.
#[derive(Clone, Debug)]
pub struct FeedConfig {
    pub title: String,
    pub link: String,
    pub description: String,
    pub language: String,
    pub image_url: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            title: "XYZRank 每日热榜 (Podwise 专用)".into(),
            link: "https://github.com/cellinlab/xyzrank".into(),
            description:
                "由 GitHub Action 自动抓取并转换为 Podwise 专用的播客热榜。注意：内容为网页链接，非音频直链。"
                    .into(),
            language: "zh-cn".into(),
            image_url: "https://img.logo.com/xyzrank_logo.png".into(),
        }
    }
}

/// Maps one episode to an RSS item.
///
/// Missing fields arrive as empty strings and a bad `postTime` degrades to
/// `now`, so no single record can fail the feed. The serializer escapes all
/// text and attribute values.
pub fn build_item(ep: &EpisodeRecord, now: DateTime<Utc>) -> rss::Item {
    let description = format!(
        "来自播客: {}. 点击链接跳转到小宇宙页面：{}",
        ep.podcast_name, ep.link
    );

    // type text/html: the enclosure targets the episode web page, not audio.
    let enclosure = EnclosureBuilder::default()
        .url(ep.link.clone())
        .mime_type("text/html".to_string())
        .build();

    let guid = GuidBuilder::default()
        .value(ep.link.clone())
        .permalink(false)
        .build();

    let itunes = ITunesItemExtensionBuilder::default()
        .image(Some(ep.logo_url.clone()))
        .build();

    ItemBuilder::default()
        .title(Some(format!("{} | {}", ep.title, ep.podcast_name)))
        .link(Some(ep.link.clone()))
        .description(Some(description))
        .enclosure(Some(enclosure))
        .guid(Some(guid))
        .pub_date(Some(
            pub_date::normalize(ep.post_time.as_deref(), now).into_text(),
        ))
        .itunes_ext(Some(itunes))
        .build()
}

/// Assembles the complete feed document, items in input order.
///
/// An empty list yields `None`; the caller must not write a file for it.
pub fn build_feed(
    episodes: &[EpisodeRecord],
    config: &FeedConfig,
    now: DateTime<Utc>,
) -> Option<String> {
    if episodes.is_empty() {
        return None;
    }

    let items: Vec<rss::Item> = episodes.iter().map(|ep| build_item(ep, now)).collect();

    let itunes = ITunesChannelExtensionBuilder::default()
        .image(Some(config.image_url.clone()))
        .build();

    let channel = ChannelBuilder::default()
        .title(config.title.clone())
        .link(config.link.clone())
        .description(config.description.clone())
        .language(Some(config.language.clone()))
        .itunes_ext(Some(itunes))
        .items(items)
        .build();

    Some(format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}",
        channel
    ))
}

/// Assembles and writes the feed. Returns whether a document was produced.
pub fn write_feed(episodes: &[EpisodeRecord], config: &FeedConfig, path: &str) -> Result<bool> {
    match build_feed(episodes, config, Utc::now()) {
        Some(xml) => {
            let mut file = File::create(path)?;
            file.write_all(xml.as_bytes())?;
            Ok(true)
        }
        None => {
            warn!("episodes list is empty, skipping RSS generation");
            Ok(false)
        }
    }
}
