//! stressmark - terminal client for a text stress-analysis service
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};
use stressmark::OutputFormat;
use stressmark_app::config::{self, Settings};
use stressmark_app::Engine;
use stressmark_client::HttpStressClient;
use stressmark_core::logging;

/// stressmark - see where a text's stress falls
#[derive(Parser, Debug)]
#[command(name = "stressmark", version)]
#[command(about = "Terminal client for a text stress-analysis service", long_about = None)]
struct Args {
    /// Base URL of the stress-analysis service (overrides the config file)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Path to config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Submit once and print NDJSON events instead of starting the TUI
    #[arg(long)]
    headless: bool,

    /// Text to submit in headless mode (default: all of stdin)
    #[arg(long, requires = "headless")]
    text: Option<String>,

    /// Result payload in headless mode
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let config_path = args.config.clone().or_else(config::default_config_path);

    if args.init_config {
        let path = config_path.ok_or_else(|| eyre!("No config directory; pass --config PATH"))?;
        config::init_config_file(&path)?;
        println!("{}", path.display());
        return Ok(());
    }

    let mut settings = match &config_path {
        Some(path) => config::load_settings(path),
        None => Settings::default(),
    };
    if let Some(server) = args.server {
        settings.server.base_url = server;
    }

    let client = HttpStressClient::new(&settings.server.base_url, settings.request_timeout())?;
    let engine = Engine::new(settings, client);

    if args.headless {
        let text = match args.text {
            Some(text) => text,
            None => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .wrap_err("Failed to read text from stdin")?;
                text
            }
        };

        if !stressmark::run_headless(engine, text, args.format).await? {
            std::process::exit(1);
        }
        return Ok(());
    }

    stressmark_tui::run(engine).await?;
    Ok(())
}
