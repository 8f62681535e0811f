use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tokio::{fs, process::Command};

use crate::{
    cache::{get_cache_dir, get_captions_path},
    error::{Result, SentipairError},
    pipeline::TranscriptSource,
    types::CaptionFragment,
};

/// One event of a YouTube json3 caption track. Styling events carry no
/// segments and are skipped.
#[derive(Debug, Deserialize)]
struct CaptionEvent {
    #[serde(rename = "tStartMs")]
    start_ms: f64,
    #[serde(rename = "dDurationMs")]
    duration_ms: Option<f64>,
    segs: Option<Vec<CaptionSeg>>,
}

#[derive(Debug, Deserialize)]
struct CaptionSeg {
    utf8: String,
}

#[derive(Debug, Deserialize)]
struct CaptionTrack {
    events: Vec<CaptionEvent>,
}

/// Parse a json3 caption track into timed fragments.
pub fn parse_json3(raw: &str) -> Result<Vec<CaptionFragment>> {
    let track: CaptionTrack = serde_json::from_str(raw)?;

    Ok(track
        .events
        .into_iter()
        .filter_map(|event| {
            let segs = event.segs?;
            let text: String = segs.into_iter().map(|s| s.utf8).collect();
            let text = text.replace('\n', " ").trim().to_string();
            if text.is_empty() {
                return None;
            }
            Some(CaptionFragment {
                text,
                start: event.start_ms / 1000.0,
                duration: event.duration_ms.unwrap_or(0.0) / 1000.0,
            })
        })
        .collect())
}

/// Transcript source backed by yt-dlp's caption download. Fetched tracks are
/// cached per link and reused on later runs.
pub struct YtDlpSource {
    lang: String,
}

impl YtDlpSource {
    pub fn new(lang: impl Into<String>) -> Self {
        Self { lang: lang.into() }
    }

    async fn download_captions(&self, link: &str, cache_dir: &Path) -> Result<PathBuf> {
        let output_template = cache_dir.join("captions");
        let output = Command::new("yt-dlp")
            .arg(link)
            .arg("--skip-download")
            .arg("--write-subs")
            .arg("--write-auto-subs")
            .arg("--sub-langs")
            .arg(&self.lang)
            .arg("--sub-format")
            .arg("json3")
            .arg("-o")
            .arg(&output_template)
            .output()
            .await?;

        if !output.status.success() {
            return Err(SentipairError::TranscriptUnavailable {
                link: link.to_string(),
                reason: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        let expected = get_captions_path(cache_dir, &self.lang);
        if expected.exists() {
            return Ok(expected);
        }

        // Auto subs may land under a variant tag like "en-orig".
        find_caption_track(cache_dir).ok_or_else(|| SentipairError::TranscriptUnavailable {
            link: link.to_string(),
            reason: "no caption track was written".to_string(),
        })
    }
}

fn find_caption_track(cache_dir: &Path) -> Option<PathBuf> {
    let entries = std::fs::read_dir(cache_dir).ok()?;
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json3") {
            return Some(path);
        }
    }
    None
}

#[async_trait]
impl TranscriptSource for YtDlpSource {
    async fn fetch_transcript(&self, link: &str) -> Result<Vec<CaptionFragment>> {
        let cache_dir = get_cache_dir(link);
        fs::create_dir_all(&cache_dir).await?;

        let track_path = match find_caption_track(&cache_dir) {
            Some(cached) => cached,
            None => self.download_captions(link, &cache_dir).await?,
        };

        let raw = fs::read_to_string(&track_path).await?;
        let fragments = parse_json3(&raw)?;
        if fragments.is_empty() {
            return Err(SentipairError::TranscriptUnavailable {
                link: link.to_string(),
                reason: "caption track contains no text".to_string(),
            });
        }
        Ok(fragments)
    }
}
