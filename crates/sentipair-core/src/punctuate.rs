use crate::{
    error::{Result, SentipairError},
    types::CaptionFragment,
};

/// Quantile of the duration-per-character distribution above which a clause
/// boundary is inferred.
pub const COMMA_QUANTILE: f64 = 0.65;
/// Quantile marking very slow articulation, where a sentence break rather
/// than a clause break likely occurs. Kept as a separate threshold, but it
/// currently resolves to the same separator as the comma band.
pub const DOT_QUANTILE: f64 = 0.90;

/// Separator injected between inferred clauses. Cleaning already removed all
/// commas from the fragments, so it cannot collide with caption text.
pub const CLAUSE_SEPARATOR: char = ',';

/// Per-video timing statistics over adjacent caption fragments. All vectors
/// have one entry per fragment except the last, which has no successor to
/// measure against and is dropped from further processing.
#[derive(Debug, Clone)]
pub struct TimingStats {
    /// Silence between a fragment's end and the next fragment's start.
    pub gaps: Vec<f64>,
    /// Seconds between consecutive starts divided by the fragment's
    /// character count. Slow speech shows up as a high value.
    pub dur_per_char: Vec<f64>,
    pub comma_threshold: f64,
    pub dot_threshold: f64,
}

/// Quantile with linear interpolation between closest ranks.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let frac = pos - lower as f64;
    sorted[lower] + frac * (sorted[upper] - sorted[lower])
}

/// Compute gap and duration-per-character series plus the boundary
/// thresholds for one video's cleaned fragments.
pub fn timing_stats(fragments: &[CaptionFragment]) -> Result<TimingStats> {
    if fragments.len() < 2 {
        return Err(SentipairError::DegenerateVideo {
            fragments: fragments.len(),
        });
    }

    let mut gaps = Vec::with_capacity(fragments.len() - 1);
    let mut dur_per_char = Vec::with_capacity(fragments.len() - 1);
    for pair in fragments.windows(2) {
        let (cur, next) = (&pair[0], &pair[1]);
        gaps.push(next.start - (cur.start + cur.duration));
        // Cleaning dropped empty fragments, so the char count is nonzero.
        let chars = cur.text.chars().count().max(1);
        dur_per_char.push((next.start - cur.start) / chars as f64);
    }

    let mut sorted = dur_per_char.clone();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let comma_threshold = quantile(&sorted, COMMA_QUANTILE);
    let dot_threshold = quantile(&sorted, DOT_QUANTILE);

    Ok(TimingStats {
        gaps,
        dur_per_char,
        comma_threshold,
        dot_threshold,
    })
}

/// Reconstruct clause boundaries for one video from caption timing alone.
///
/// A separator is placed after fragment i when there is silence before the
/// next fragment (`gap > 0`) or when the fragment was articulated slowly
/// (`dur_per_char` above the comma threshold; the dot band emits the same
/// separator). The final fragment has no timing metrics and is dropped, an
/// accepted information loss. Output clauses are trimmed and non-empty.
pub fn infer_clauses(fragments: &[CaptionFragment]) -> Result<Vec<String>> {
    let stats = timing_stats(fragments)?;

    let mut joined = String::new();
    for (i, fragment) in fragments[..fragments.len() - 1].iter().enumerate() {
        joined.push_str(&fragment.text);
        let boundary = stats.gaps[i] > 0.0 || stats.dur_per_char[i] > stats.comma_threshold;
        if boundary {
            joined.push(CLAUSE_SEPARATOR);
        }
    }

    Ok(joined
        .split(CLAUSE_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(text: &str, start: f64, duration: f64) -> CaptionFragment {
        CaptionFragment {
            text: text.to_string(),
            start,
            duration,
        }
    }

    #[test]
    fn quantile_interpolates_linearly() {
        let sorted = [0.25, 0.25, 1.0];
        assert!((quantile(&sorted, 0.65) - 0.475).abs() < 1e-9);
        assert_eq!(quantile(&sorted, 0.0), 0.25);
        assert_eq!(quantile(&sorted, 1.0), 1.0);
        assert_eq!(quantile(&[0.5], 0.9), 0.5);
    }

    #[test]
    fn fewer_than_two_fragments_is_degenerate() {
        let err = infer_clauses(&[fragment("alone", 0.0, 1.0)]).unwrap_err();
        assert!(matches!(
            err,
            SentipairError::DegenerateVideo { fragments: 1 }
        ));
        assert!(infer_clauses(&[]).is_err());
    }

    #[test]
    fn silence_gap_forces_a_boundary() {
        // Fragment "iii" ends at 3.0 but the next starts at 4.0.
        let fragments = [
            fragment("hhhh", 0.0, 2.0),
            fragment("iii", 2.0, 1.0),
            fragment("jjjjjjjj", 4.0, 4.0),
            fragment("tail", 8.0, 2.0),
        ];
        let clauses = infer_clauses(&fragments).unwrap();
        assert_eq!(clauses, vec!["hhhhiii", "jjjjjjjj"]);
    }

    #[test]
    fn slow_articulation_forces_a_boundary() {
        // Back-to-back fragments, but "sl" covers 4s over 2 chars.
        let fragments = [
            fragment("aaaaaaaa", 0.0, 2.0),
            fragment("bbbbbbbb", 2.0, 2.0),
            fragment("sl", 4.0, 4.0),
            fragment("cccccccc", 8.0, 2.0),
            fragment("tail", 10.0, 2.0),
        ];
        let stats = timing_stats(&fragments).unwrap();
        assert!(stats.dur_per_char[2] > stats.comma_threshold);
        assert!(stats.dot_threshold >= stats.comma_threshold);

        let clauses = infer_clauses(&fragments).unwrap();
        assert_eq!(clauses, vec!["aaaaaaaabbbbbbbbsl", "cccccccc"]);
    }

    #[test]
    fn last_fragment_is_dropped() {
        let fragments = [
            fragment("kept", 0.0, 1.0),
            fragment("dropped", 1.0, 1.0),
        ];
        let clauses = infer_clauses(&fragments).unwrap();
        assert_eq!(clauses, vec!["kept"]);
    }

    #[test]
    fn separator_placement_is_deterministic() {
        let fragments = [
            fragment("one two", 0.0, 1.5),
            fragment("three", 2.0, 1.0),
            fragment("four five six", 3.0, 2.0),
            fragment("seven", 5.0, 1.0),
            fragment("eight nine", 7.0, 2.0),
        ];
        let first = infer_clauses(&fragments).unwrap();
        let second = infer_clauses(&fragments).unwrap();
        assert_eq!(first, second);
    }
}
