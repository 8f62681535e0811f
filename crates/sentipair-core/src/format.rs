use crate::types::CorpusResult;

/// Format a second count as whole hours, the way totals are reported.
pub fn format_hours(seconds: u64) -> String {
    format!("{} hours", seconds / 3600)
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 { None } else { Some(sum / count as f64) }
}

/// Format a per-corpus result as a human-readable summary block.
pub fn format_corpus_summary(label: &str, result: &CorpusResult, discovered: usize) -> String {
    let mut output = String::new();

    output.push_str(&format!("## {label}\n\n"));
    output.push_str(&format!(
        "Videos: {} analysed, {} skipped | Keyword windows: {}\n",
        result.processed(),
        discovered.saturating_sub(result.processed()),
        result.scores.len()
    ));

    let polarity = mean(result.scores.iter().map(|s| s.polarity));
    let subjectivity = mean(result.scores.iter().map(|s| s.subjectivity));
    let overall = mean(result.scores.iter().map(|s| s.overall));
    match (polarity, subjectivity, overall) {
        (Some(p), Some(s), Some(o)) => {
            output.push_str(&format!(
                "Mean polarity: {p:+.4} | Mean subjectivity: {s:.4} | Mean overall: {o:+.4}\n"
            ));
        }
        _ => output.push_str("No keyword windows found.\n"),
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScoredWindow;

    #[test]
    fn formats_whole_hours() {
        assert_eq!(format_hours(0), "0 hours");
        assert_eq!(format_hours(7200), "2 hours");
        assert_eq!(format_hours(7199), "1 hours");
    }

    #[test]
    fn summary_reports_means_and_counts() {
        let result = CorpusResult {
            scores: vec![
                ScoredWindow {
                    polarity: 0.5,
                    subjectivity: 0.4,
                    overall: 0.2,
                },
                ScoredWindow {
                    polarity: -0.5,
                    subjectivity: 0.6,
                    overall: -0.3,
                },
            ],
            counts_per_video: vec![2, 0],
            upload_age_days: vec![10.0, 20.0],
        };
        let summary = format_corpus_summary("Channel A", &result, 3);
        assert!(summary.contains("2 analysed, 1 skipped"));
        assert!(summary.contains("Keyword windows: 2"));
        assert!(summary.contains("Mean polarity: +0.0000"));
    }

    #[test]
    fn summary_without_windows_says_so() {
        let result = CorpusResult::default();
        let summary = format_corpus_summary("Channel B", &result, 0);
        assert!(summary.contains("No keyword windows found."));
    }
}
