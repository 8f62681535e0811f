use std::time::Duration;

use async_trait::async_trait;

use crate::{
    clean::clean_fragments,
    error::{Result, SentipairError},
    punctuate::infer_clauses,
    sentiment::SentimentScorer,
    types::{CaptionFragment, Corpus, CorpusResult, ScoredWindow},
    window::keyword_windows,
};

/// Source of timed caption fragments for a video link. Implemented by the
/// yt-dlp wrapper in production and by in-memory fixtures in tests.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn fetch_transcript(&self, link: &str) -> Result<Vec<CaptionFragment>>;
}

/// Run the full per-video chain for one link: fetch, clean, infer clause
/// boundaries, extract keyword windows, score. The fetch timeout maps to the
/// same error path as any other transcript failure.
pub async fn process_video(
    source: &dyn TranscriptSource,
    link: &str,
    keywords: &[String],
    fetch_timeout: Duration,
    scorer: &SentimentScorer,
) -> Result<Vec<ScoredWindow>> {
    let fragments = tokio::time::timeout(fetch_timeout, source.fetch_transcript(link))
        .await
        .map_err(|_| SentipairError::TranscriptUnavailable {
            link: link.to_string(),
            reason: "transcript fetch timed out".to_string(),
        })??;

    let cleaned = clean_fragments(fragments);
    let clauses = infer_clauses(&cleaned)?;
    let windows = keyword_windows(&clauses, keywords);
    Ok(windows.iter().map(|w| scorer.score(w)).collect())
}

/// Process an equalized corpus into a time-ordered sentiment signal.
///
/// Videos are processed newest to oldest (reverse of the stored order). A
/// failing video is skipped whole: it contributes no scores, no window count
/// and no age entry, and the batch continues. A succeeding video always
/// contributes exactly one count entry and one age entry, even when its
/// count is zero, with its windows appended contiguously to `scores`.
pub async fn analyze_corpus(
    source: &dyn TranscriptSource,
    corpus: &Corpus,
    keywords: &[String],
    fetch_timeout: Duration,
) -> CorpusResult {
    let scorer = SentimentScorer::new();
    let mut result = CorpusResult::default();

    for video in corpus.videos.iter().rev() {
        match process_video(source, &video.link, keywords, fetch_timeout, &scorer).await {
            Ok(windows) => {
                result.counts_per_video.push(windows.len());
                result.upload_age_days.push(video.upload_age_days);
                result.scores.extend(windows);
            }
            Err(_) => {
                // Fail-skip: a bad transcript never aborts the batch.
            }
        }
    }

    debug_assert_eq!(
        result.counts_per_video.iter().sum::<usize>(),
        result.scores.len()
    );
    debug_assert_eq!(result.counts_per_video.len(), result.upload_age_days.len());

    result
}
