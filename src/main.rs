use clap::Parser;
use fetchview::StalePolicy;
use fetchview::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "fetchview", about = "Fetch a JSON endpoint and show it in the terminal")]
struct Args {
    /// Origin that /api is requested from (overrides config and FETCHVIEW_BASE_URL)
    #[arg(short, long)]
    base_url: Option<String>,

    /// What to do with a response that resolves after a newer request was made
    #[arg(short, long, value_enum)]
    stale_responses: Option<StalePolicy>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - the terminal is owned by the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("fetchview.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        eprintln!("fetchview: {e}; using defaults");
        config::FetchviewConfig::default()
    });
    let resolved = config::resolve(&file_config, args.base_url.as_deref(), args.stale_responses);

    log::info!(
        "fetchview starting: base_url={}, stale_responses={:?}",
        resolved.base_url,
        resolved.stale_responses
    );

    fetchview::tui::run(resolved)
}
