use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs;

use sentipair_core::{
    AnalysisReport, Corpus, CorpusReport, YtDlpSource, analyze_corpus, discover_channel,
    equalize_watch_time, expand_keywords, filter_age_window, format_corpus_summary, format_hours,
    get_report_path, get_root_cache_dir, load_report, save_report, total_watch_seconds,
};

#[derive(Parser)]
#[command(name = "sentipair")]
#[command(
    about = "Compare topic sentiment between two YouTube channels from caption timing, with watch-time equalization"
)]
struct Cli {
    /// Topic word to track across both channels
    topic: String,

    /// First channel or playlist URL
    channel_a: String,

    /// Second channel or playlist URL
    channel_b: String,

    /// Only analyse videos uploaded in or after this year
    #[arg(long)]
    start_year: Option<i32>,

    /// Only analyse videos uploaded in or before this year
    #[arg(long)]
    end_year: Option<i32>,

    /// Extra synonyms to track alongside the thesaurus expansion
    #[arg(short, long = "synonym")]
    synonyms: Vec<String>,

    /// Caption language
    #[arg(short, long, default_value = "en")]
    lang: String,

    /// Per-video transcript fetch timeout in seconds
    #[arg(long, default_value_t = 60)]
    fetch_timeout: u64,

    /// Output report path (defaults to the cache directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Force re-analysis even if a cached report exists
    #[arg(short, long)]
    force: bool,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

async fn discover(url: &str, label: &str, cli: &Cli) -> Result<Corpus> {
    let spinner = create_spinner(&format!("Listing videos for {label}..."));
    let mut corpus = discover_channel(url, label).await?;
    filter_age_window(&mut corpus, cli.start_year, cli.end_year);
    spinner.finish_with_message(format!(
        "{} {}: {} videos, {}",
        style("✓").green().bold(),
        label,
        corpus.len(),
        style(format_hours(total_watch_seconds(&corpus))).dim()
    ));
    Ok(corpus)
}

fn print_summaries(report: &AnalysisReport) {
    println!("{}", style("─".repeat(60)).dim());
    for corpus_report in &report.corpora {
        println!(
            "{}",
            format_corpus_summary(
                &corpus_report.label,
                &corpus_report.result,
                corpus_report.discovered
            )
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    println!(
        "\n{}  {}\n",
        style("sentipair").cyan().bold(),
        style("Channel Sentiment Comparison").dim()
    );

    let report_path = match &cli.output {
        Some(path) => path.clone(),
        None => {
            fs::create_dir_all(get_root_cache_dir()).await?;
            get_report_path(&cli.topic)
        }
    };

    // A finished report for this topic can be reused as-is.
    if !cli.force && report_path.exists() {
        let report = load_report(&report_path).await?;
        println!(
            "{} Report for {} {}",
            style("✓").green().bold(),
            style(&report.topic).yellow(),
            style("(cached)").dim()
        );
        print_summaries(&report);
        return Ok(());
    }

    // Step 1: Expand the topic into the keyword set
    let spinner = create_spinner("Expanding synonyms...");
    let keywords = expand_keywords(&cli.topic, &cli.synonyms).await?;
    spinner.finish_with_message(format!(
        "{} Tracking {} keywords for {}",
        style("✓").green().bold(),
        keywords.len(),
        style(&cli.topic).yellow()
    ));
    println!(
        "  {}",
        style(
            keywords
                .iter()
                .map(|k| k.trim())
                .collect::<Vec<_>>()
                .join(", ")
        )
        .dim()
    );

    // Step 2: Discover both channels
    let mut corpus_a = discover(&cli.channel_a, "Channel A", &cli).await?;
    let mut corpus_b = discover(&cli.channel_b, "Channel B", &cli).await?;

    // Step 3: Equalize total watch time before any transcript is fetched
    equalize_watch_time(&mut corpus_a, &mut corpus_b);
    println!(
        "{} Balanced watch time: {} vs {}",
        style("✓").green().bold(),
        style(format_hours(total_watch_seconds(&corpus_a))).cyan(),
        style(format_hours(total_watch_seconds(&corpus_b))).cyan()
    );

    // Step 4: Process both corpora
    let source = YtDlpSource::new(&cli.lang);
    let fetch_timeout = Duration::from_secs(cli.fetch_timeout);

    let spinner = create_spinner(&format!("Analysing {} videos of Channel A...", corpus_a.len()));
    let result_a = analyze_corpus(&source, &corpus_a, &keywords, fetch_timeout).await;
    spinner.finish_with_message(format!(
        "{} Channel A: {} windows from {} videos",
        style("✓").green().bold(),
        result_a.scores.len(),
        result_a.processed()
    ));

    let spinner = create_spinner(&format!("Analysing {} videos of Channel B...", corpus_b.len()));
    let result_b = analyze_corpus(&source, &corpus_b, &keywords, fetch_timeout).await;
    spinner.finish_with_message(format!(
        "{} Channel B: {} windows from {} videos",
        style("✓").green().bold(),
        result_b.scores.len(),
        result_b.processed()
    ));

    // Step 5: Persist and summarize
    let report = AnalysisReport {
        topic: cli.topic.clone(),
        keywords,
        corpora: vec![
            CorpusReport {
                label: cli.channel_a.clone(),
                discovered: corpus_a.len(),
                result: result_a,
            },
            CorpusReport {
                label: cli.channel_b.clone(),
                discovered: corpus_b.len(),
                result: result_b,
            },
        ],
    };

    save_report(&report, &report_path).await?;

    println!(
        "\n{} {}\n",
        style("Saved:").dim(),
        style(report_path.display()).cyan()
    );
    print_summaries(&report);

    Ok(())
}
