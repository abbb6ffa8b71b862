use clap::Parser;
use flashdeck::core::config::{self, CliOverrides, ConfigOrigin};
use flashdeck::tui;
use log::{debug, info, warn};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flashdeck", about = "Terminal flashcard viewer", version)]
struct Args {
    /// URL of the JSON card list
    #[arg(short, long)]
    url: Option<String>,

    /// Read the card list from a local JSON file instead
    #[arg(short, long, conflicts_with = "url")]
    file: Option<PathBuf>,

    /// Never run the text-to-speech program
    #[arg(long)]
    no_speech: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The logger isn't up yet, so keep what config loading found and report it below
    let (file_config, origin) = match config::load_config() {
        Ok((c, origin)) => (c, Ok(origin)),
        Err(e) => (config::FlashdeckConfig::default(), Err(e)),
    };

    let cli = CliOverrides {
        url: args.url,
        file: args.file,
        no_speech: args.no_speech,
    };
    let resolved = config::resolve(&file_config, &cli);

    // Initialize file logger - the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    match origin {
        Ok(origin @ ConfigOrigin::Generated { error: Some(_), .. }) => warn!("{}", origin),
        Ok(origin) => info!("{}", origin),
        Err(e) => warn!("Ignoring config file: {}", e),
    }
    for warning in &resolved.warnings {
        warn!("{}", warning);
    }
    debug!("Resolved config: {:?}", resolved);
    info!("Flashdeck starting up with source: {:?}", resolved.location);

    tui::run(resolved)
}
