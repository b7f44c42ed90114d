use clap::Parser;
use species_listing::app::render::{render_json, render_text};
use species_listing::utils::{logger, validation::Validate};
use species_listing::{
    CardPresenter, CliConfig, ListingError, OutputFormat, SwapiClient, ViewController,
};

/// Invalid settings exit with 2; anything else (e.g. an unreadable config
/// file) with 1.
fn exit_code(e: &ListingError) -> i32 {
    if e.is_config_error() {
        2
    } else {
        1
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting species-listing");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(exit_code(&e));
        }
    };

    let presenter = CardPresenter::new(&config);
    let film_id = config.film_id.clone();
    let controller = ViewController::new(SwapiClient::new(config), film_id);

    controller.mount().await;
    let state = controller.state();

    let rendered = match cli.format {
        OutputFormat::Text => render_text(&state, &presenter),
        OutputFormat::Json => render_json(&state, &presenter)?,
    };
    println!("{}", rendered.trim_end());

    if state.has_error() {
        std::process::exit(1);
    }

    Ok(())
}
