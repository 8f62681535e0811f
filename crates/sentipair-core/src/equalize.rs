use crate::types::Corpus;

/// Parse a colon-separated duration ("1:02:30", "12:34" or "45") into
/// seconds. Fields are read right to left as seconds, minutes, hours.
/// Anything that does not fit u64 seconds is unparseable, not a panic.
pub fn parse_duration_seconds(raw: &str) -> Option<u64> {
    let mut total = 0u64;
    let mut unit = 1u64;
    for field in raw.trim().rsplit(':') {
        if unit > 3600 {
            return None;
        }
        let value: u64 = field.trim().parse().ok()?;
        total = value.checked_mul(unit).and_then(|v| total.checked_add(v))?;
        unit *= 60;
    }
    Some(total)
}

/// Total measurable watch time of a corpus in seconds. Videos with a missing
/// or unparseable duration are dropped from the sum entirely.
pub fn total_watch_seconds(corpus: &Corpus) -> u64 {
    corpus
        .videos
        .iter()
        .filter_map(|v| v.raw_duration.as_deref().and_then(parse_duration_seconds))
        .sum()
}

/// Downsample the larger of two corpora until both represent a comparable
/// total watch time (floor ratio of 1, i.e. within a factor of two).
///
/// Whole video records are deleted at a fixed stride, so link, age and
/// duration stay together by construction. The smaller corpus is never
/// touched. If either corpus has no measurable duration at all the ratio is
/// undefined and both corpora are left as they are.
pub fn equalize_watch_time(a: &mut Corpus, b: &mut Corpus) {
    let (total_a, total_b) = (total_watch_seconds(a), total_watch_seconds(b));
    if total_a == 0 || total_b == 0 {
        return;
    }
    if total_a >= total_b {
        downsample_toward(a, total_b);
    } else {
        downsample_toward(b, total_a);
    }
}

/// Repeatedly delete every stride-th video (1-based) from `larger`,
/// recomputing the stride from the remaining total after each pass. Stops at
/// a floor ratio of 1, or when a pass removes nothing (the stride exceeded
/// the list length, as with a single-video corpus), since no further pass
/// can converge.
fn downsample_toward(larger: &mut Corpus, target_seconds: u64) {
    loop {
        let total = total_watch_seconds(larger);
        let stride = (total / target_seconds) as usize;
        if stride <= 1 {
            break;
        }
        let before = larger.videos.len();
        let mut index = 0usize;
        larger.videos.retain(|_| {
            index += 1;
            index % stride != 0
        });
        if larger.videos.len() == before {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VideoMeta;

    fn corpus(label: &str, durations: &[Option<&str>]) -> Corpus {
        let videos = durations
            .iter()
            .enumerate()
            .map(|(i, d)| VideoMeta {
                link: format!("https://youtu.be/{label}{i}"),
                raw_duration: d.map(str::to_string),
                upload_age_days: i as f64,
            })
            .collect();
        Corpus {
            label: label.to_string(),
            videos,
        }
    }

    #[test]
    fn parses_colon_durations_right_to_left() {
        assert_eq!(parse_duration_seconds("1:00:00"), Some(3600));
        assert_eq!(parse_duration_seconds("3:00:00"), Some(10800));
        assert_eq!(parse_duration_seconds("12:34"), Some(754));
        assert_eq!(parse_duration_seconds("45"), Some(45));
        assert_eq!(parse_duration_seconds(""), None);
        assert_eq!(parse_duration_seconds("1:2:3:4"), None);
        assert_eq!(parse_duration_seconds("soon"), None);
    }

    #[test]
    fn oversized_fields_are_unparseable_not_a_panic() {
        // Parses as a number but overflows u64 seconds.
        assert_eq!(parse_duration_seconds("9999999999999999:00:00"), None);
        assert_eq!(parse_duration_seconds("18446744073709551615:00"), None);
        // Still fits.
        assert_eq!(
            parse_duration_seconds("18446744073709551615"),
            Some(u64::MAX)
        );
    }

    #[test]
    fn unparseable_durations_are_dropped_from_the_total() {
        let c = corpus("a", &[Some("10:00"), None, Some("oops"), Some("0:30")]);
        assert_eq!(total_watch_seconds(&c), 630);
    }

    #[test]
    fn single_video_corpora_are_left_unchanged() {
        // Ratio 3, but a stride of 3 never lands on a one-element list.
        let mut small = corpus("a", &[Some("1:00:00")]);
        let mut big = corpus("b", &[Some("3:00:00")]);
        equalize_watch_time(&mut small, &mut big);
        assert_eq!(small.len(), 1);
        assert_eq!(big.len(), 1);
    }

    #[test]
    fn converges_to_a_floor_ratio_of_one() {
        let mut a = corpus("a", &[Some("1:00:00"); 10]);
        let mut b = corpus("b", &[Some("1:00:00"); 2]);
        equalize_watch_time(&mut a, &mut b);

        let (ta, tb) = (total_watch_seconds(&a), total_watch_seconds(&b));
        assert_eq!(tb, 7200, "smaller corpus must not be touched");
        assert_eq!(b.len(), 2);
        assert!(ta.max(tb) / ta.min(tb) <= 1);
    }

    #[test]
    fn downsampling_keeps_records_whole_and_ordered() {
        let mut a = corpus("a", &[Some("1:00:00"); 9]);
        let mut b = corpus("b", &[Some("2:00:00")]);
        equalize_watch_time(&mut a, &mut b);

        let mut last_age = -1.0;
        for video in &a.videos {
            assert!(video.upload_age_days > last_age, "order must be preserved");
            last_age = video.upload_age_days;
            // Each surviving record still carries its own link and duration.
            let index = video.upload_age_days as usize;
            assert!(video.link.ends_with(&format!("a{index}")));
            assert_eq!(video.raw_duration.as_deref(), Some("1:00:00"));
        }
    }

    #[test]
    fn zero_total_duration_fails_open() {
        let mut a = corpus("a", &[None, Some("nope")]);
        let mut b = corpus("b", &[Some("5:00:00"); 4]);
        equalize_watch_time(&mut a, &mut b);
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 4);
    }
}
