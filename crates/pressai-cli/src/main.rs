mod output;
mod releases;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use pressai_core::AppConfig;
use pressai_sentiment::{BatchReport, Pipeline};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pressai-cli")]
#[command(about = "Score AI-related sentiment in corporate press releases")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score every local release and write the CSV table
    Score {
        /// Directory of release files (defaults to `PRESSAI_RELEASES_DIR`)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Output CSV path (defaults to `PRESSAI_OUTPUT_PATH`)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Restrict scoring to one company (by registry name)
        #[arg(long)]
        company: Option<String>,

        /// List the releases that would be scored without writing anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the scored AI sentences of one text file as JSON
    Inspect {
        /// Plain-text release file
        path: PathBuf,
    },
    /// List the configured companies
    Companies,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = pressai_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Score {
            dir,
            output,
            company,
            dry_run,
        }) => run_score(
            &config,
            dir.as_deref(),
            output.as_deref(),
            company.as_deref(),
            dry_run,
        ),
        Some(Commands::Inspect { path }) => run_inspect(&path),
        Some(Commands::Companies) => run_companies(&config),
        None => {
            println!("pressai-cli: no command given, see --help");
            Ok(())
        }
    }
}

/// Load local releases, score them in parallel and write the CSV table.
///
/// A run that yields no rows is reported and leaves no output file behind.
fn run_score(
    config: &AppConfig,
    dir: Option<&Path>,
    output: Option<&Path>,
    company_filter: Option<&str>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let companies = pressai_core::load_companies(&config.companies_path)?;
    let dir = dir.unwrap_or(config.releases_dir.as_path());
    let output = output.unwrap_or(config.output_path.as_path());

    let mut items = if dir.is_dir() {
        releases::load_local_releases(dir, &companies)?
    } else {
        tracing::warn!(dir = %dir.display(), "releases directory not found");
        Vec::new()
    };

    if let Some(name) = company_filter {
        if !companies
            .companies
            .iter()
            .any(|c| c.name.eq_ignore_ascii_case(name))
        {
            anyhow::bail!("company '{name}' not found in {}", config.companies_path.display());
        }
        items.retain(|item| item.company.eq_ignore_ascii_case(name));
    }

    if dry_run {
        println!("dry-run: would score {} releases:", items.len());
        for item in &items {
            let company = if item.company.is_empty() {
                "-"
            } else {
                item.company.as_str()
            };
            println!("  [{company}] {}", item.url);
        }
        return Ok(());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.max_parallel)
        .build()
        .context("failed to build worker pool")?;
    let pipeline = Pipeline::new();
    let report = pool.install(|| pipeline.run_batch(&items));

    write_report(&report, output)
}

/// Write the rows of a finished batch, or report why there are none.
///
/// A batch whose releases all failed is an error; one that had nothing to
/// score is not.
fn write_report(report: &BatchReport, output: &Path) -> anyhow::Result<()> {
    if report.is_empty() {
        if report.failed > 0 {
            anyhow::bail!(
                "no releases processed: {} failed to score ({} skipped)",
                report.failed,
                report.skipped
            );
        }
        println!("No releases processed. Check config and local_releases/.");
        return Ok(());
    }

    output::write_csv_file(output, &report.rows)?;
    println!(
        "Wrote {} results to {}",
        report.rows.len(),
        output.display()
    );
    if report.failed > 0 {
        tracing::warn!(failed = report.failed, "some releases could not be scored");
    }
    Ok(())
}

fn run_inspect(path: &Path) -> anyhow::Result<()> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let text = String::from_utf8_lossy(&bytes);
    let scored = Pipeline::new().score_text(&text)?;
    println!("{}", serde_json::to_string_pretty(&scored)?);
    Ok(())
}

fn run_companies(config: &AppConfig) -> anyhow::Result<()> {
    let companies = pressai_core::load_companies(&config.companies_path)?;
    for company in &companies.companies {
        match &company.newsroom_url {
            Some(url) => println!("{:<12} {url}", company.name),
            None => println!("{}", company.name),
        }
    }
    Ok(())
}
