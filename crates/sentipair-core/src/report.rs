use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::{error::Result, types::CorpusResult};

/// Full output of one comparison run, ready for persistence.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub topic: String,
    pub keywords: Vec<String>,
    pub corpora: Vec<CorpusReport>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct CorpusReport {
    pub label: String,
    /// How many videos survived discovery and equalization; together with
    /// `result.processed()` this gives the skip count.
    pub discovered: usize,
    pub result: CorpusResult,
}

/// Save a report to a file
pub async fn save_report(report: &AnalysisReport, path: &Path) -> Result<()> {
    let pretty_json = serde_json::to_string_pretty(report)?;
    fs::write(path, &pretty_json).await?;
    Ok(())
}

/// Load a previously saved report
pub async fn load_report(path: &Path) -> Result<AnalysisReport> {
    let json_content = fs::read_to_string(path).await?;
    let report: AnalysisReport = serde_json::from_str(&json_content)?;
    Ok(report)
}
