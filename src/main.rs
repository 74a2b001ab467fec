//! bingrab - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{fmt, EnvFilter};

use bingrab::{
    cli::Args,
    config::{validate_config, Config},
    download::DownloadPipeline,
    error::{exit_codes, Error, Result},
    fs::prepare_image_dir,
    output::{
        create_download_bar, print_banner, print_config_summary, print_error, print_info,
        print_run_stats, print_warning,
    },
    search::{LinkDiscoverer, SearchClient},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::InvalidFilename(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Search(_) => ExitCode::from(exit_codes::SEARCH_ERROR as u8),
                Error::Download(_) | Error::InvalidImage(_) | Error::Io(_) => {
                    ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug {
        "debug"
    } else if args.verbose {
        "info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Load configuration file if given, then merge CLI arguments over it
    let mut config = match &args.config {
        Some(path) => {
            let config = Config::load(path)?;
            print_info(&format!("Loaded configuration from {}", path.display()));
            config
        }
        None => Config::default(),
    };
    args.merge_into_config(&mut config);

    // Validate configuration before any network activity
    validate_config(&mut config)?;

    print_banner();

    // Prepare destination directory (fatal if it cannot be created)
    let image_dir = prepare_image_dir(&config)?;
    print_config_summary(
        &config.search.query,
        config.search.limit,
        &image_dir.display().to_string(),
    );

    // Ctrl-C cancels between requests; the run returns what it has so far
    let cancel = CancellationToken::new();
    let signal_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, finishing in-flight work");
            signal_token.cancel();
        }
    });

    let client = SearchClient::new(&config)?;
    let mut discoverer = LinkDiscoverer::new(&client, &config, cancel.clone());

    let bar = create_download_bar(config.search.limit as u64);
    let observer_bar = bar.clone();
    let pipeline = DownloadPipeline::new(&client, &config, image_dir, cancel)
        .with_observer(Box::new(move |accepted| {
            observer_bar.set_position(accepted as u64);
        }));

    let state = pipeline.run(&mut discoverer).await?;
    bar.finish_and_clear();

    if !state.is_complete() {
        print_warning("Run ended before reaching the requested limit");
    }
    print_run_stats(&state);

    Ok(())
}
