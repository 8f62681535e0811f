use std::collections::HashSet;

use serde::Deserialize;

use crate::error::{Result, SentipairError};

const DATAMUSE_URL: &str = "https://api.datamuse.com/words";

#[derive(Debug, Deserialize)]
struct DatamuseWord {
    word: String,
}

/// Turn raw words into the final keyword set: underscores become spaces,
/// each word contributes its original and capitalized form, duplicates are
/// dropped, and every keyword is padded with boundary spaces so it can only
/// match as a whole word inside a clause.
pub fn build_keyword_set(words: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut keywords = Vec::new();

    for word in words {
        let word = word.replace('_', " ");
        let word = word.trim();
        if word.is_empty() {
            continue;
        }
        for variant in [word.to_string(), capitalize(word)] {
            if seen.insert(variant.clone()) {
                keywords.push(format!(" {variant} "));
            }
        }
    }

    keywords
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Look up synonyms of the topic word via the Datamuse thesaurus API.
pub async fn fetch_synonyms(word: &str) -> Result<Vec<String>> {
    let response = reqwest::Client::new()
        .get(DATAMUSE_URL)
        .query(&[("rel_syn", word), ("max", "30")])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(SentipairError::SynonymLookupFailed {
            word: word.to_string(),
            reason: format!("thesaurus API returned {}", response.status()),
        });
    }

    let words = response.json::<Vec<DatamuseWord>>().await?;
    Ok(words.into_iter().map(|w| w.word).collect())
}

/// Expand a topic into its padded keyword set: the topic itself, its
/// thesaurus synonyms and any user-supplied extras.
pub async fn expand_keywords(topic: &str, extra: &[String]) -> Result<Vec<String>> {
    let mut words = vec![topic.to_string()];
    words.extend(fetch_synonyms(topic).await?);
    words.extend(extra.iter().cloned());
    Ok(build_keyword_set(words))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_padded_and_deduped() {
        let keywords = build_keyword_set(vec![
            "market".to_string(),
            "stock_exchange".to_string(),
            "Market".to_string(),
        ]);
        assert_eq!(
            keywords,
            vec![" market ", " Market ", " stock exchange ", " Stock exchange "]
        );
    }

    #[test]
    fn blank_words_are_ignored() {
        let keywords = build_keyword_set(vec!["  ".to_string(), "_".to_string()]);
        assert!(keywords.is_empty());
    }
}
