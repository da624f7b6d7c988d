// src/episode.rs
use anyhow::Result;
use log::warn;
use serde::Deserialize;
use serde_json::Value;

/// One entry of the XYZRank hot-episodes list.
///
/// Text fields the upstream JSON may omit default to empty strings when the
/// record is deserialized, so downstream code never branches on presence.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EpisodeRecord {
    pub title: String,
    /// Episode page on xiaoyuzhou, not an audio URL.
    pub link: String,
    pub podcast_name: String,
    #[serde(rename = "logoURL")]
    pub logo_url: String,
    /// Raw ISO-8601 text, possibly `Z`-suffixed. Parsed lazily by `pub_date`.
    pub post_time: Option<String>,
}

/// Pulls `data.episodes` out of the raw hot-list JSON.
///
/// A missing or wrong-shaped `data`/`episodes` node counts as an empty list,
/// and a malformed record is logged and skipped without touching its
/// neighbours; only syntactically invalid JSON is an error.
pub fn extract_episodes(raw: &str) -> Result<Vec<EpisodeRecord>> {
    let doc: Value = serde_json::from_str(raw)?;
    let episodes = doc
        .get("data")
        .and_then(|d| d.get("episodes"))
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(|v| match serde_json::from_value(v.clone()) {
                    Ok(ep) => Some(ep),
                    Err(e) => {
                        warn!("skipping malformed episode record: {e}");
                        None
                    }
                })
                .collect()
        })
        .unwrap_or_default();
    Ok(episodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_record_maps_camel_case_fields() {
        let raw = r#"{"data":{"episodes":[{
            "title":"Ep1",
            "link":"https://x.test/1",
            "podcastName":"Cast A",
            "logoURL":"https://x.test/logo.png",
            "postTime":"2024-03-01T08:00:00Z"
        }]}}"#;
        let eps = extract_episodes(raw).unwrap();
        assert_eq!(eps.len(), 1);
        assert_eq!(eps[0].title, "Ep1");
        assert_eq!(eps[0].link, "https://x.test/1");
        assert_eq!(eps[0].podcast_name, "Cast A");
        assert_eq!(eps[0].logo_url, "https://x.test/logo.png");
        assert_eq!(eps[0].post_time.as_deref(), Some("2024-03-01T08:00:00Z"));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let raw = r#"{"data":{"episodes":[{"title":"only a title"}]}}"#;
        let eps = extract_episodes(raw).unwrap();
        assert_eq!(eps[0].title, "only a title");
        assert_eq!(eps[0].link, "");
        assert_eq!(eps[0].podcast_name, "");
        assert_eq!(eps[0].logo_url, "");
        assert_eq!(eps[0].post_time, None);
    }

    #[test]
    fn absent_data_or_episodes_is_empty() {
        assert!(extract_episodes("{}").unwrap().is_empty());
        assert!(extract_episodes(r#"{"data":{}}"#).unwrap().is_empty());
        assert!(
            extract_episodes(r#"{"data":{"episodes":[]}}"#)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn wrong_shape_is_empty() {
        assert!(extract_episodes(r#"{"data":"nope"}"#).unwrap().is_empty());
        assert!(
            extract_episodes(r#"{"data":{"episodes":"nope"}}"#)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn malformed_record_is_skipped_not_fatal() {
        let raw = r#"{"data":{"episodes":[
            {"title":"Ep1","link":"https://x.test/1"},
            {"title":123},
            {"title":"Ep3","link":"https://x.test/3"}
        ]}}"#;
        let eps = extract_episodes(raw).unwrap();
        assert_eq!(eps.len(), 2);
        assert_eq!(eps[0].title, "Ep1");
        assert_eq!(eps[1].title, "Ep3");
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(extract_episodes("not json at all").is_err());
    }
}
