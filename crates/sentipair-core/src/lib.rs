//! Sentipair Core Library
//!
//! Turns the caption timing of two YouTube channels into a time-ordered
//! sentiment signal around a topic: equalizes total watch time between the
//! channels, reconstructs clause boundaries from caption timing statistics,
//! extracts keyword-anchored context windows and scores them for polarity
//! and subjectivity.

pub mod cache;
pub mod clean;
pub mod discovery;
pub mod equalize;
pub mod error;
pub mod format;
pub mod pipeline;
pub mod punctuate;
pub mod report;
pub mod sentiment;
pub mod synonyms;
pub mod transcript;
pub mod types;
pub mod window;

// Re-export commonly used items at crate root
pub use cache::{get_cache_dir, get_captions_path, get_report_path, get_root_cache_dir};
pub use clean::clean_fragments;
pub use discovery::{discover_channel, filter_age_window};
pub use equalize::{equalize_watch_time, parse_duration_seconds, total_watch_seconds};
pub use error::{Result, SentipairError};
pub use format::{format_corpus_summary, format_hours};
pub use pipeline::{TranscriptSource, analyze_corpus};
pub use punctuate::{infer_clauses, timing_stats};
pub use report::{AnalysisReport, CorpusReport, load_report, save_report};
pub use sentiment::SentimentScorer;
pub use synonyms::{build_keyword_set, expand_keywords};
pub use transcript::YtDlpSource;
pub use types::{CaptionFragment, Corpus, CorpusResult, ScoredWindow, VideoMeta};
pub use window::keyword_windows;
