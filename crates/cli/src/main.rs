use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, bail};
use clap::{ArgGroup, Parser};
use followback_core::{
    FetchConfig, Report, ReportConfig, TargetCache, compute_non_mutual, extract_followers, fetch_target_list,
    parse_target_csv, profile_url,
};
use owo_colors::OwoColorize;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for the reconciliation result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    /// Human-readable list with per-entry profile URLs
    List,
    /// Copy-ready plain text with the header/footer banner
    Text,
    /// Structured JSON report
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "list" => Ok(Self::List),
            "text" | "txt" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: list, text, json", s)),
        }
    }
}

/// Find which target accounts do not follow you back
#[derive(Parser, Debug)]
#[command(name = "followback")]
#[command(author = "Followback Contributors")]
#[command(version = "1.0.0")]
#[command(about = "Find which target accounts do not follow you back", long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["sheet_url", "targets"])))]
struct Args {
    /// Exported followers HTML file, or "-" for stdin
    #[arg(value_name = "SNAPSHOT")]
    snapshot: String,

    /// Your own handle, excluded from the result
    #[arg(long, value_name = "HANDLE")]
    id: String,

    /// Published sheet share URL holding the target list
    #[arg(long, value_name = "URL")]
    sheet_url: Option<String>,

    /// Local CSV file holding the target list
    #[arg(long, value_name = "FILE")]
    targets: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (list, text, json)
    #[arg(short, long, default_value = "list", value_name = "FORMAT")]
    format: OutputFormat,

    /// Omit the header/footer banner (text format only)
    #[arg(long)]
    no_banner: bool,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Skip reading and writing the on-disk target-list cache
    #[arg(long)]
    no_cache: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Print a styled banner for verbose mode
fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "Followback".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Find which target accounts do not follow you back".dimmed());
    eprintln!();
}

/// Print a styled step message
fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print a warning message
fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Format file size for display
fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Fetch the target list, falling back to the on-disk cache when allowed.
async fn load_remote_targets(url: &str, config: &FetchConfig, args: &Args) -> anyhow::Result<Vec<String>> {
    let cache = if args.no_cache { None } else { TargetCache::new() };

    match fetch_target_list(url, config).await {
        Ok(targets) => {
            if let Some(cache) = &cache {
                if let Err(e) = cache.store(&targets) {
                    print_warning(&format!("Could not update target-list cache: {}", e));
                }
            }
            Ok(targets)
        }
        Err(fetch_err) => {
            if let Some(cache) = &cache {
                if let Ok(targets) = cache.load() {
                    print_warning(&format!(
                        "Fetching the target list failed ({}); using the cached copy from {}",
                        fetch_err,
                        cache.path().display()
                    ));
                    return Ok(targets);
                }
            }
            Err(fetch_err).context("Failed to fetch the target list")
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
    }

    let (html, size) = if args.snapshot == "-" {
        if args.verbose {
            print_step(1, 4, "Reading snapshot from stdin");
        }
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        let len = buffer.len();
        (buffer, len)
    } else {
        if args.verbose {
            print_step(1, 4, &format!("Reading snapshot {}", args.snapshot.bright_white()));
        }
        let content =
            fs::read_to_string(&args.snapshot).with_context(|| format!("Failed to read file: {}", args.snapshot))?;
        let len = content.len();
        (content, len)
    };

    if args.verbose {
        eprintln!("  {} {}", "Size:".dimmed(), format_size(size).bright_white());
        eprintln!();
    }

    if args.verbose {
        print_step(2, 4, "Loading target list");
    }

    let target_list = if let Some(path) = &args.targets {
        let csv = fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
        parse_target_csv(&csv).context("Failed to parse target CSV")?
    } else {
        // The clap group guarantees one of the two sources is present.
        let url = args.sheet_url.as_deref().context("No target-list source given")?;
        let config = FetchConfig {
            timeout: args.timeout,
            user_agent: args
                .user_agent
                .clone()
                .unwrap_or_else(|| "Mozilla/5.0 (compatible; Followback/1.0)".to_string()),
        };
        load_remote_targets(url, &config, &args).await?
    };

    if target_list.is_empty() {
        print_warning("The target list is empty; nothing to reconcile.");
        bail!("The target list has no entries. Check the sheet contents or the CSV file.");
    }

    if args.verbose {
        eprintln!(
            "  {} {}",
            "Targets:".dimmed(),
            target_list.len().to_string().bright_white()
        );
        eprintln!();
    }

    if args.verbose {
        print_step(3, 4, "Reconciling followers against the target list");
    }

    let followers = extract_followers(&html).context(
        "No follower handles found in the snapshot. Check that this is the followers HTML from your data export",
    )?;
    let non_mutual = compute_non_mutual(&target_list, &followers, &args.id);
    let report = Report::new(non_mutual, target_list.len(), followers.len());

    if args.verbose {
        eprintln!(
            "  {} {}",
            "Followers:".dimmed(),
            report.follower_count.to_string().bright_white()
        );
        eprintln!(
            "  {} {}",
            "Non-mutual:".dimmed(),
            report.non_mutual.len().to_string().bright_white()
        );
        eprintln!();
    }

    let output = match args.format {
        OutputFormat::List => {
            if report.all_mutual() {
                "All target accounts follow you back.\n".to_string()
            } else {
                let mut out = format!("{} account(s) not following back:\n", report.non_mutual.len());
                for id in &report.non_mutual {
                    out.push_str(&format!("{}\t{}\n", id, profile_url(id)));
                }
                out
            }
        }
        OutputFormat::Text => {
            let config = ReportConfig { include_banner: !args.no_banner, include_profile_urls: false };
            let mut text = report.to_text(&config);
            text.push('\n');
            text
        }
        OutputFormat::Json => {
            let mut json = report.to_json().context("Failed to serialize report")?;
            json.push('\n');
            json
        }
    };

    if args.verbose {
        print_step(4, 4, "Writing output");
        eprintln!(
            "  {} {}",
            "Format:".dimmed(),
            format!("{:?}", args.format).bright_white()
        );
        eprintln!();
    }

    match args.output {
        Some(path) => {
            fs::write(&path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            print!("{}", output);
        }
    }

    Ok(())
}
