//! CLI that reads an HTML page from a file or stdin, suggests selectors for
//! its repeated content and extracts links with a chosen selector.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use selector_scout::encoding::decode_html;
use selector_scout::extract::{self, DEFAULT_SELECTOR};
use selector_scout::{
    analyze_with_options, Analysis, Error, Options, Report, Result, ScrapedLink, DEFAULT_TOP_N,
};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "selector-scout")]
#[command(about = "Suggest CSS selectors for scrapable content and extract links")]
struct Args {
    /// HTML file to read (default: stdin, also with "-")
    #[arg()]
    input: Option<PathBuf>,

    /// Max number of descriptors per suggested selector
    #[arg(short = 'd', long = "depth", default_value = "2", allow_negative_numbers = true)]
    depth: i64,

    /// How many top tags/classes/ids/selectors to show
    #[arg(short = 'n', long = "top", default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// CSS selector for elements to extract
    #[arg(short = 's', long = "selector")]
    selector: Option<String>,

    /// Also print the selector suggestions report
    #[arg(long = "suggest")]
    suggest: bool,

    /// Print links and suggestions as one JSON object
    #[arg(long = "json")]
    json: bool,

    /// URL the page came from; resolves relative links and names saved files
    #[arg(long = "url")]
    url: Option<String>,

    /// Write extracted links as JSON to this file
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Write extracted links into this directory, named after --url
    #[arg(long = "save-dir", requires = "url", conflicts_with = "output")]
    save_dir: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn read_input(input: Option<&Path>) -> Result<Vec<u8>> {
    match input {
        Some(path) if path != Path::new("-") => Ok(fs::read(path)?),
        _ => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Everything `--json` prints, as one document.
#[derive(Serialize)]
struct JsonOutput<'a> {
    links: &'a [ScrapedLink],
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestions: Option<&'a Analysis>,
}

fn save_links(links: &[ScrapedLink], path: &Path) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(links)?)?;
    info!("Results saved to: {}", path.display());
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    // Validate before reading anything so bad depths produce no output
    let options = Options {
        top_n: args.top,
        ..Options::with_signed_depth(args.depth)?
    };

    let bytes = read_input(args.input.as_deref())?;
    let html = decode_html(&bytes);

    let base = match args.url.as_deref() {
        Some(u) => Some(Url::parse(u).map_err(|e| {
            Error::InvalidConfiguration(format!("invalid --url {u}: {e}"))
        })?),
        None => None,
    };

    let selector = args.selector.as_deref().unwrap_or(DEFAULT_SELECTOR);
    info!("Parsing HTML and extracting with selector: {selector}");
    let links = extract::extract_links_with_base(&html, selector, base.as_ref())?;
    info!("Extracted {} items.", links.len());

    let target = match (&args.output, &args.save_dir, &args.url) {
        (Some(path), _, _) => Some(path.clone()),
        (None, Some(dir), Some(url)) => Some(dir.join(extract::output_filename(url))),
        _ => None,
    };
    if let Some(path) = target {
        save_links(&links, &path)?;
    }

    let fallback = links.is_empty() && !args.suggest;
    if fallback {
        warn!("No results found with the current selector. Scanning for scrapable elements...");
    }
    let analysis = if args.suggest || fallback {
        Some(analyze_with_options(&html, &options)?)
    } else {
        None
    };

    if args.json {
        let output = JsonOutput {
            links: &links,
            suggestions: analysis.as_ref(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let report = analysis.as_ref().map(|a| Report::new(a).with_summaries(true));
    if let Some(report) = report.filter(|_| args.suggest) {
        print!("{report}");
    }
    println!("{}", serde_json::to_string_pretty(&links)?);
    if let Some(report) = report.filter(|_| fallback) {
        print!("{report}");
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}
