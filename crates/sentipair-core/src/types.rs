use serde::{Deserialize, Serialize};

/// Metadata for a single discovered video. The transcript itself is fetched
/// lazily, after duration equalization has settled which videos survive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoMeta {
    pub link: String,
    /// Human-readable duration ("H:MM:SS"); None when the listing omits it.
    pub raw_duration: Option<String>,
    pub upload_age_days: f64,
}

/// The ordered video set of one channel, newest video last. Equalization
/// removes whole records in place and never reorders, so link, duration and
/// age always travel together.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub label: String,
    pub videos: Vec<VideoMeta>,
}

impl Corpus {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            videos: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

/// One timed caption fragment as delivered by the transcript source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionFragment {
    pub text: String,
    /// Offset from the start of the video, in seconds.
    pub start: f64,
    pub duration: f64,
}

/// Sentiment scores for one keyword window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredWindow {
    /// Polarity in [-1, 1].
    pub polarity: f64,
    /// Subjectivity in [0, 1].
    pub subjectivity: f64,
    /// polarity * subjectivity.
    pub overall: f64,
}

impl ScoredWindow {
    pub fn neutral() -> Self {
        Self {
            polarity: 0.0,
            subjectivity: 0.0,
            overall: 0.0,
        }
    }
}

/// Per-corpus output of the pipeline. Entries of `counts_per_video` and
/// `upload_age_days` are parallel over the successfully processed videos,
/// and `scores` holds each video's windows contiguously in processing order,
/// so `sum(counts_per_video) == scores.len()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorpusResult {
    pub scores: Vec<ScoredWindow>,
    pub counts_per_video: Vec<usize>,
    pub upload_age_days: Vec<f64>,
}

impl CorpusResult {
    /// Number of videos that made it through the pipeline.
    pub fn processed(&self) -> usize {
        self.counts_per_video.len()
    }
}
