//! YouTube transcript retriever.
//!
//! Pulls caption text from the timedtext endpoint (json3 format) and the
//! video title from the oEmbed API. Implements `ContentPort` for targets
//! classified as video.

use crate::domain::{ContentBundle, Fragment, RetrievalError};
use crate::ports::ContentPort;
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

/// Retrieves video transcripts plus basic metadata.
pub struct YoutubeRetriever {
    client: reqwest::Client,
    language: String,
}

impl YoutubeRetriever {
    /// `language` is the caption track language code (e.g. "en").
    pub fn new(language: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            language,
        }
    }

    /// Extract the video id from the supported URL shapes:
    /// `youtu.be/<id>`, `youtube.com/watch?v=<id>`, `/shorts/<id>`, `/embed/<id>`.
    pub(crate) fn video_id(url: &Url) -> Option<String> {
        let host = url.host_str()?;

        if host.eq_ignore_ascii_case("youtu.be") {
            let seg = url.path_segments()?.next()?.trim();
            if !seg.is_empty() {
                return Some(seg.to_string());
            }
            return None;
        }

        if url.path().starts_with("/watch") {
            for (k, v) in url.query_pairs() {
                if k == "v" && !v.trim().is_empty() {
                    return Some(v.trim().to_string());
                }
            }
        }

        if let Some(mut segs) = url.path_segments() {
            let a = segs.next().unwrap_or("");
            let b = segs.next().unwrap_or("");
            if (a == "shorts" || a == "embed") && !b.trim().is_empty() {
                return Some(b.to_string());
            }
        }

        None
    }

    /// Join the cue text of a timedtext json3 payload into one string.
    /// Returns an empty string when the payload carries no caption events.
    pub(crate) fn transcript_from_json(body: &Value) -> String {
        body["events"]
            .as_array()
            .map(|events| {
                events
                    .iter()
                    .filter_map(|event| {
                        event["segs"].as_array().map(|segs| {
                            segs.iter()
                                .filter_map(|seg| seg["utf8"].as_str())
                                .collect::<Vec<_>>()
                                .join("")
                        })
                    })
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default()
    }

    async fn fetch_transcript(&self, video_id: &str) -> Result<String, RetrievalError> {
        let url = format!(
            "https://www.youtube.com/api/timedtext?v={}&lang={}&fmt=json3",
            video_id, self.language
        );
        debug!(video_id, lang = %self.language, "fetching transcript");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RetrievalError::Network(format!("transcript fetch: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RetrievalError::TranscriptUnavailable);
        }
        if !status.is_success() {
            return Err(RetrievalError::Http(status.as_u16()));
        }

        let raw = response
            .text()
            .await
            .map_err(|e| RetrievalError::Network(format!("transcript read: {}", e)))?;

        // The endpoint answers 200 with an empty body when the video has no
        // caption track in the requested language.
        if raw.trim().is_empty() {
            return Err(RetrievalError::TranscriptUnavailable);
        }
        let body: Value = serde_json::from_str(&raw)
            .map_err(|_| RetrievalError::TranscriptUnavailable)?;
        let text = Self::transcript_from_json(&body);
        if text.trim().is_empty() {
            return Err(RetrievalError::TranscriptUnavailable);
        }
        Ok(text)
    }

    /// Best-effort title lookup via oEmbed. Failure only costs metadata.
    async fn fetch_title(&self, target: &Url) -> Option<String> {
        let oembed_url = format!(
            "https://www.youtube.com/oembed?url={}&format=json",
            urlencoding::encode(target.as_str())
        );
        let value = self
            .client
            .get(&oembed_url)
            .send()
            .await
            .ok()?
            .json::<Value>()
            .await
            .ok()?;
        value["title"].as_str().map(|s| s.to_string())
    }
}

#[async_trait::async_trait]
impl ContentPort for YoutubeRetriever {
    async fn retrieve(&self, target: &Url) -> Result<ContentBundle, RetrievalError> {
        let video_id = Self::video_id(target).ok_or(RetrievalError::InvalidVideoUrl)?;

        let transcript = self.fetch_transcript(&video_id).await?;
        let title = self.fetch_title(target).await;
        if title.is_none() {
            warn!(video_id, "no title available via oEmbed");
        }

        info!(
            video_id,
            transcript_len = transcript.len(),
            "video content retrieved"
        );

        let mut fragment = Fragment::new(transcript, target.as_str());
        if let Some(t) = title {
            fragment = fragment.with_title(t);
        }
        Ok(ContentBundle::single(fragment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn id_of(u: &str) -> Option<String> {
        YoutubeRetriever::video_id(&Url::parse(u).unwrap())
    }

    #[test]
    fn video_id_from_watch_url() {
        assert_eq!(id_of("https://www.youtube.com/watch?v=abc123"), Some("abc123".into()));
        assert_eq!(
            id_of("https://youtube.com/watch?t=10&v=xyz"),
            Some("xyz".into())
        );
    }

    #[test]
    fn video_id_from_short_and_embed_urls() {
        assert_eq!(id_of("https://youtu.be/dQw4w9WgXcQ"), Some("dQw4w9WgXcQ".into()));
        assert_eq!(id_of("https://youtube.com/shorts/s1"), Some("s1".into()));
        assert_eq!(id_of("https://www.youtube.com/embed/e1"), Some("e1".into()));
    }

    #[test]
    fn video_id_missing_for_non_video_paths() {
        assert_eq!(id_of("https://www.youtube.com/feed/trending"), None);
        assert_eq!(id_of("https://www.youtube.com/watch"), None);
    }

    #[test]
    fn transcript_joins_caption_segments() {
        let body = json!({
            "events": [
                {"segs": [{"utf8": "binary "}, {"utf8": "search"}]},
                {"tStartMs": 100},
                {"segs": [{"utf8": "is O(log n)"}]}
            ]
        });
        assert_eq!(
            YoutubeRetriever::transcript_from_json(&body),
            "binary search is O(log n)"
        );
    }

    #[test]
    fn transcript_empty_when_no_events() {
        assert_eq!(YoutubeRetriever::transcript_from_json(&json!({})), "");
        assert_eq!(
            YoutubeRetriever::transcript_from_json(&json!({"events": []})),
            ""
        );
    }
}
