use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use tracing::warn;

use legacy_import::config::Settings;
use legacy_import::mapping::map_tag;
use legacy_import::parser::sections::DeviceKind;
use legacy_import::{parse_file, parse_report, ParsedReport};

#[derive(Parser)]
#[command(name = "legacy_import", about = "Convert legacy installer reports into import payloads")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one report and print the JSON payload
    Parse {
        /// Report file, or "-" for stdin
        file: PathBuf,
        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// Parse many reports, writing <name>.json for each
    Batch {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Output directory (default: next to each input)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
    /// Human-readable device table for one report
    Summary {
        /// Report file, or "-" for stdin
        file: PathBuf,
    },
    /// List device kinds and their category/deviceType
    Kinds {
        /// Look up a single kind tag (unknown tags show the fallback)
        tag: Option<String>,
    },
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let settings = Settings::load().context("loading settings")?;
    init_tracing(&settings.log);

    let t0 = Instant::now();
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { file, compact } => {
            let report = read_and_parse(&file)?;
            println!("{}", report.to_json(settings.pretty && !compact)?);
        }
        Commands::Batch { files, out_dir } => {
            let out_dir = out_dir.or(settings.out_dir.clone());
            let counts = run_batch(&files, out_dir.as_deref(), settings.pretty)?;
            counts.print();
            let elapsed = t0.elapsed();
            if elapsed.as_secs() >= 1 {
                println!("\nDone in {}", format_duration(elapsed));
            }
        }
        Commands::Summary { file } => {
            let report = read_and_parse(&file)?;
            print_summary(&report);
        }
        Commands::Kinds { tag } => {
            let tags: Vec<&str> = match &tag {
                Some(t) => vec![t.as_str()],
                None => DeviceKind::ALL.iter().map(|k| k.tag()).collect(),
            };
            println!("{:<16} | {:<12} | {:<14}", "Kind", "Category", "Device Type");
            println!("{}", "-".repeat(46));
            for tag in tags {
                let (category, device_type) = map_tag(tag);
                println!("{:<16} | {:<12} | {:<14}", tag, category, device_type);
            }
        }
    }

    Ok(())
}

fn read_and_parse(file: &Path) -> Result<ParsedReport> {
    if file.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading report from stdin")?;
        return Ok(parse_report(&text)?);
    }
    parse_file(file).with_context(|| format!("parsing {}", file.display()))
}

struct BatchCounts {
    reports: usize,
    devices: usize,
    wifi: usize,
    failed: usize,
}

impl BatchCounts {
    fn print(&self) {
        println!(
            "Parsed {} reports: {} devices, {} wifi networks, {} failed.",
            self.reports, self.devices, self.wifi, self.failed,
        );
    }
}

fn run_batch(files: &[PathBuf], out_dir: Option<&Path>, pretty: bool) -> Result<BatchCounts> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    if let Some(dir) = out_dir {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
            .progress_chars("#>-"),
    );

    let mut counts = BatchCounts {
        reports: 0,
        devices: 0,
        wifi: 0,
        failed: 0,
    };

    for chunk in files.chunks(64) {
        let results: Vec<_> = chunk.par_iter().map(|path| (path, parse_file(path))).collect();

        for (path, result) in results {
            let report = match result {
                Ok(report) => report,
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    counts.failed += 1;
                    continue;
                }
            };
            if let Err(e) = write_report(&report, &output_path(path, out_dir), pretty) {
                warn!("Failed to write output for {}: {:#}", path.display(), e);
                counts.failed += 1;
                continue;
            }
            counts.reports += 1;
            counts.devices += report.devices.len();
            counts.wifi += report.wifi_networks.len();
        }
        pb.inc(chunk.len() as u64);
    }

    pb.finish_and_clear();
    Ok(counts)
}

fn write_report(report: &ParsedReport, target: &Path, pretty: bool) -> Result<()> {
    std::fs::write(target, report.to_json(pretty)?)
        .with_context(|| format!("writing {}", target.display()))
}

fn output_path(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    let name = input
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "report".into());
    let mut target = match out_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    };
    target.set_extension("json");
    target
}

fn print_summary(report: &ParsedReport) {
    let project = if report.project_name.is_empty() {
        "(unnamed project)"
    } else {
        report.project_name.as_str()
    };
    println!("{}", project);
    println!("{}\n", "=".repeat(project.chars().count()));

    if !report.wifi_networks.is_empty() {
        println!("--- Wi-Fi ---");
        for net in &report.wifi_networks {
            let password = if net.password.is_empty() { "(open)" } else { net.password.as_str() };
            println!("  {}: {}", truncate(&net.ssid, 32), password);
        }
        println!();
    }

    println!(
        "{:>3} | {:<20} | {:<10} | {:<14} | {:<15} | {:<20}",
        "#", "Device", "Category", "Type", "IP", "Location"
    );
    println!("{}", "-".repeat(96));
    for (i, d) in report.devices.iter().enumerate() {
        println!(
            "{:>3} | {:<20} | {:<10} | {:<14} | {:<15} | {:<20}",
            i + 1,
            truncate(&d.name, 20),
            d.category,
            d.device_type,
            truncate(&d.ip_address, 15),
            truncate(&d.location, 20)
        );
    }

    let by_category = report
        .device_count_by_category()
        .into_iter()
        .map(|(category, n)| format!("{} {}", n, category))
        .join(", ");
    println!("\n{} devices ({})", report.devices.len(), by_category);
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
