use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use lotto::output::write_draw;
use lotto::parse_draw;
use lotto::scraper::WebScraper;
use lotto::types::Draw;

/// Downloads the latest Lotto results page and re-publishes the draw as
/// a static archive table.
#[derive(Parser)]
#[command(name = "lotto", version)]
#[command(about = "Lotto results scraper for estrazionedellotto.it", long_about = None)]
struct Cli {
    #[arg(
        short = 'l',
        long = "log-level",
        value_enum,
        default_value_t = Verbosity::Info,
        global = true,
        help = "How much progress to report on stderr"
    )]
    log_level: Verbosity,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Verbosity {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Off => LevelFilter::Off,
            Verbosity::Error => LevelFilter::Error,
            Verbosity::Warn => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(clap::Args)]
struct Source {
    #[arg(long, help = "Page to scrape instead of the default results page")]
    url: Option<String>,

    #[arg(
        long,
        value_name = "FILE",
        conflicts_with = "url",
        help = "Read a previously downloaded page instead of fetching it"
    )]
    input: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the latest draw and write it as an HTML table
    Save {
        #[command(flatten)]
        source: Source,

        #[arg(
            short = 'd',
            long,
            value_name = "DIR",
            default_value = "templates",
            help = "Directory the HTML file is written to"
        )]
        dir: PathBuf,

        #[arg(long, help = "File name to use instead of the one derived from the draw date")]
        file_name: Option<String>,
    },
    /// Fetch the latest draw and print it without writing anything
    Show {
        #[command(flatten)]
        source: Source,

        #[arg(
            short = 'o',
            long = "output",
            value_enum,
            default_value = "text",
            help = "Output format"
        )]
        format: OutputFormat,
    },
}

async fn load_draw(source: Source) -> Draw {
    if let Some(input) = source.input {
        log::info!("Reading page from {}...", input.display());
        let html = fs::read_to_string(&input).unwrap_or_else(|e| {
            log::error!("Error reading {}: {}", input.display(), e);
            process::exit(1);
        });
        return parse_draw(&html).unwrap_or_else(|e| {
            log::error!("Error parsing {}: {}", input.display(), e);
            process::exit(1);
        });
    }

    let mut scraper = WebScraper::new().unwrap_or_else(|e| {
        log::error!("Error creating scraper: {}", e);
        process::exit(1);
    });
    if let Some(url) = source.url {
        scraper = scraper.with_url(url);
    }

    scraper.fetch_latest_draw().await.unwrap_or_else(|e| {
        log::error!("Error fetching latest draw: {}", e);
        process::exit(1);
    })
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.level_filter())
        .format_timestamp(None)
        .init();

    match cli.command {
        Commands::Save {
            source,
            dir,
            file_name,
        } => {
            let draw = load_draw(source).await;
            log::info!("Draw found: {}", draw.header);

            let path = write_draw(&dir, file_name.as_deref(), &draw).unwrap_or_else(|e| {
                log::error!("Error saving draw: {}", e);
                process::exit(1);
            });

            log::info!("Draw saved with {} wheel(s)", draw.rows.len());
            println!("{}", path.display());
        }

        Commands::Show { source, format } => {
            let draw = load_draw(source).await;

            match format {
                OutputFormat::Json => match serde_json::to_string_pretty(&draw) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        log::error!("Error serializing to JSON: {}", e);
                        process::exit(1);
                    }
                },
                OutputFormat::Text => print!("{}", draw),
            }
        }
    }
}
