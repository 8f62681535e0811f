/// Extract keyword-anchored context windows from a clause stream.
///
/// Single left-to-right scan with one-step lookahead. A clause containing a
/// keyword absorbs its immediate predecessor and successor into one window;
/// when the absorbed successor would itself trigger, the existing window
/// grows instead of spawning an overlapping duplicate. The scan carries a
/// single "next clause already absorbed" flag rather than a membership list.
/// The final clause has no successor, is never tested as a trigger and never
/// absorbed, so streams shorter than three clauses yield no windows.
pub fn keyword_windows(clauses: &[String], keywords: &[String]) -> Vec<String> {
    let mut windows: Vec<String> = Vec::new();
    let mut next_absorbed = false;

    for i in 0..clauses.len().saturating_sub(2) {
        if next_absorbed {
            // The current clause already sits in the last window as a
            // successor; pull the following clause in as trailing context.
            if let Some(last) = windows.last_mut() {
                last.push_str(&clauses[i + 1]);
            }
            next_absorbed = false;
            continue;
        }

        let triggered = keywords.iter().any(|kw| clauses[i].contains(kw.as_str()));
        if triggered {
            let mut window = String::new();
            if i > 0 {
                window.push_str(&clauses[i - 1]);
            }
            window.push_str(&clauses[i]);
            window.push_str(&clauses[i + 1]);
            windows.push(window);
            next_absorbed = true;
        }
    }

    windows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clauses(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn keyword_clause_absorbs_neighbours() {
        let stream = clauses(&["intro", "I love synonymA here", "continue", "end"]);
        let keywords = vec![" synonymA ".to_string()];
        let windows = keyword_windows(&stream, &keywords);
        assert_eq!(windows, vec!["introI love synonymA herecontinue"]);
    }

    #[test]
    fn trigger_at_first_clause_has_no_predecessor() {
        let stream = clauses(&["the market is up", "so buy", "later", "end"]);
        let keywords = vec![" market ".to_string()];
        let windows = keyword_windows(&stream, &keywords);
        assert_eq!(windows, vec!["the market is upso buylater"]);
    }

    #[test]
    fn consecutive_triggers_grow_one_window() {
        let stream = clauses(&[
            "before",
            "the market opened",
            "the market closed",
            "aftermath",
            "end",
        ]);
        let keywords = vec![" market ".to_string()];
        let windows = keyword_windows(&stream, &keywords);
        assert_eq!(
            windows,
            vec!["beforethe market openedthe market closedaftermath"]
        );
    }

    #[test]
    fn no_keyword_yields_no_windows() {
        let stream = clauses(&["calm", "quiet", "still", "end"]);
        let windows = keyword_windows(&stream, &[" market ".to_string()]);
        assert!(windows.is_empty());
    }

    #[test]
    fn padded_keywords_do_not_match_inside_words() {
        let stream = clauses(&["the supermarkets are busy", "next", "later", "end"]);
        let windows = keyword_windows(&stream, &[" market ".to_string()]);
        assert!(windows.is_empty());
    }

    #[test]
    fn short_streams_yield_no_windows() {
        let keywords = vec![" market ".to_string()];
        assert!(keyword_windows(&[], &keywords).is_empty());
        assert!(keyword_windows(&clauses(&["the market "]), &keywords).is_empty());
        assert!(keyword_windows(&clauses(&["the market moved", "up"]), &keywords).is_empty());
    }
}
