use vader_sentiment::SentimentIntensityAnalyzer;

use crate::types::ScoredWindow;

/// Lexicon-based polarity/subjectivity scorer over free text. Construction
/// loads the lexicon, so build one scorer per corpus run and reuse it.
pub struct SentimentScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl SentimentScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    /// Score one merged window. Polarity is the VADER compound score in
    /// [-1, 1]; subjectivity is the non-neutral mass of the text in [0, 1].
    /// Blank input scores neutral rather than failing.
    pub fn score(&self, text: &str) -> ScoredWindow {
        if text.trim().is_empty() {
            return ScoredWindow::neutral();
        }

        let scores = self.analyzer.polarity_scores(text);
        let polarity = scores.get("compound").copied().unwrap_or(0.0);
        let neutral = scores.get("neu").copied().unwrap_or(1.0);
        let subjectivity = (1.0 - neutral).clamp(0.0, 1.0);

        ScoredWindow {
            polarity,
            subjectivity,
            overall: polarity * subjectivity,
        }
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}
