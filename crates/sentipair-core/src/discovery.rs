use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tokio::process::Command;

use crate::{
    error::{Result, SentipairError},
    types::{Corpus, VideoMeta},
};

#[derive(Debug, Deserialize)]
struct PlaylistDump {
    #[serde(default)]
    entries: Vec<PlaylistEntry>,
}

#[derive(Debug, Deserialize)]
struct PlaylistEntry {
    url: Option<String>,
    duration_string: Option<String>,
    upload_date: Option<String>,
}

fn age_days(upload_date: &str, today: NaiveDate) -> Option<f64> {
    let date = NaiveDate::parse_from_str(upload_date, "%Y%m%d").ok()?;
    Some((today - date).num_days() as f64)
}

/// Parse a yt-dlp flat-playlist dump into a corpus, newest video last.
/// Entries without a link or an upload date cannot be placed on the timeline
/// and are skipped.
pub fn parse_channel_dump(raw: &str, label: &str, today: NaiveDate) -> Result<Corpus> {
    let dump: PlaylistDump = serde_json::from_str(raw)?;

    let mut corpus = Corpus::new(label);
    for entry in dump.entries {
        let Some(link) = entry.url else { continue };
        let Some(age) = entry.upload_date.as_deref().and_then(|d| age_days(d, today)) else {
            continue;
        };
        corpus.videos.push(VideoMeta {
            link,
            raw_duration: entry.duration_string,
            upload_age_days: age,
        });
    }

    // yt-dlp lists uploads newest first; the pipeline expects newest last.
    corpus.videos.reverse();
    Ok(corpus)
}

/// List a channel's (or playlist's) videos via yt-dlp without touching any
/// media. Approximate upload dates are good enough for the age timeline.
pub async fn discover_channel(channel_url: &str, label: &str) -> Result<Corpus> {
    let output = Command::new("yt-dlp")
        .arg(channel_url)
        .arg("-J")
        .arg("--flat-playlist")
        .arg("--extractor-args")
        .arg("youtubetab:approximate_date")
        .output()
        .await?;

    if !output.status.success() {
        return Err(SentipairError::DiscoveryFailed {
            channel: channel_url.to_string(),
            reason: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    let raw = String::from_utf8_lossy(&output.stdout);
    parse_channel_dump(&raw, label, Utc::now().date_naive())
}

/// Trim a corpus to videos uploaded within the given calendar years. Either
/// bound may be absent. Relative order is untouched.
pub fn filter_age_window(corpus: &mut Corpus, start_year: Option<i32>, end_year: Option<i32>) {
    let today = Utc::now().date_naive();
    let max_age = start_year
        .and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1))
        .map(|d| (today - d).num_days() as f64);
    let min_age = end_year
        .and_then(|y| NaiveDate::from_ymd_opt(y, 12, 31))
        .map(|d| (today - d).num_days() as f64);

    corpus.videos.retain(|v| {
        max_age.is_none_or(|max| v.upload_age_days <= max)
            && min_age.is_none_or(|min| v.upload_age_days >= min)
    });
}
