use std::{
    hash::{DefaultHasher, Hash, Hasher},
    path::{Path, PathBuf},
};

pub fn get_root_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("sentipair")
}

/// Get the cache directory for a given video link
pub fn get_cache_dir(link: &str) -> PathBuf {
    let mut hasher = DefaultHasher::new();
    link.hash(&mut hasher);
    let link_hash = hasher.finish();

    get_root_cache_dir().join(link_hash.to_string())
}

/// Get the path for a cached caption track (language aware)
pub fn get_captions_path(cache_dir: &Path, lang: &str) -> PathBuf {
    cache_dir.join(format!("captions.{lang}.json3"))
}

/// Get the path for a cached analysis report
pub fn get_report_path(topic: &str) -> PathBuf {
    get_root_cache_dir().join(format!("report_{}.json", topic.replace(' ', "_")))
}
