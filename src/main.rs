use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use md2notion::{AppendBlocksRequest, Config, CreatePageRequest, Error};

const DEFAULT_CONFIG: &str = "md2notion.toml";

#[derive(Parser)]
#[command(name = "md2notion")]
#[command(about = "Convert Markdown to Notion block JSON")]
struct Cli {
    /// Input Markdown file (reads stdin when omitted or "-")
    input: Option<PathBuf>,

    /// Output JSON file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (defaults to md2notion.toml in the working directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Wrap the blocks in a request body for this page
    #[arg(long)]
    page_id: Option<String>,

    /// Create a child page with this title instead of appending (needs --page-id)
    #[arg(long)]
    title: Option<String>,

    /// Write single-line JSON
    #[arg(long)]
    compact: bool,

    /// Log each parsed block
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> md2notion::Result<()> {
    let config = load_config(cli.config.as_deref(), Path::new(DEFAULT_CONFIG))?;
    let markdown = read_input(cli.input.as_deref(), io::stdin().lock())?;
    let json = render(cli, &config, &markdown)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, format!("{json}\n")).map_err(|source| Error::Write {
                path: path.clone(),
                source,
            })?;
            eprintln!("Created {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }

    Ok(())
}

/// An explicit `--config` must load; the default file is optional.
fn load_config(explicit: Option<&Path>, default: &Path) -> md2notion::Result<Config> {
    match explicit {
        Some(path) => Config::try_load(path),
        None => Ok(Config::load(default)),
    }
}

fn read_input(input: Option<&Path>, mut stdin: impl Read) -> md2notion::Result<String> {
    match input {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).map_err(|source| Error::Read {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut markdown = String::new();
            stdin.read_to_string(&mut markdown)?;
            Ok(markdown)
        }
    }
}

/// Convert `markdown` and shape the JSON the flags ask for: a bare block
/// array, an append body, or a create-page body.
fn render(cli: &Cli, config: &Config, markdown: &str) -> md2notion::Result<String> {
    let pretty = config.output.pretty && !cli.compact;
    let blocks = md2notion::convert_with_config(markdown, config);
    log::info!("Converted {} blocks", blocks.len());

    match (&cli.page_id, &cli.title) {
        (Some(page_id), Some(title)) => {
            md2notion::to_json(&CreatePageRequest::new(page_id, title, blocks)?, pretty)
        }
        (Some(page_id), None) => {
            log::info!("Append target: {}", AppendBlocksRequest::path(page_id)?);
            md2notion::to_json(&AppendBlocksRequest::new(blocks), pretty)
        }
        (None, Some(_)) => Err(Error::MissingField("page_id")),
        (None, None) => md2notion::to_json(&blocks, pretty),
    }
}
