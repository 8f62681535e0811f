use std::sync::LazyLock;

use regex::Regex;

use crate::types::CaptionFragment;

/// Non-verbal annotations like "[Music]" or "[Applause]".
static BRACKET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[.*?\]").unwrap());

/// Strip a caption corpus down to spoken text. Fragments carrying a bracketed
/// annotation are dropped whole rather than having the bracket removed, and
/// any punctuation already present is stripped so the timing heuristics can
/// insert their own. Fragments left without any text are dropped too, since
/// they contribute no characters to the duration-per-character statistics.
pub fn clean_fragments(fragments: Vec<CaptionFragment>) -> Vec<CaptionFragment> {
    fragments
        .into_iter()
        .filter(|f| !BRACKET_RE.is_match(&f.text))
        .filter_map(|mut f| {
            f.text.retain(|c| c != '.' && c != ',');
            if f.text.trim().is_empty() {
                None
            } else {
                Some(f)
            }
        })
        .collect()
}
