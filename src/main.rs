//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here; the query pipeline lives in ShowtimeService.

use clap::Parser;
use dotenv::dotenv;
use le_cinema::adapters::listings::{HttpListingsAdapter, MockListingsAdapter};
use le_cinema::adapters::location::ConfiguredLocation;
use le_cinema::adapters::persistence::PrefsJson;
use le_cinema::adapters::ui::tui::TuiInputPort;
use le_cinema::domain::{Preferences, Timeframe, TitleCollator};
use le_cinema::ports::{InputPort, ListingsPort, PreferencesPort};
use le_cinema::shared::config::AppConfig;
use le_cinema::usecases::ShowtimeService;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "le-cinema")]
#[command(about = "Nearby screenings of the films on your Letterboxd watchlist")]
#[command(version)]
struct Cli {
    /// Time window: anytime, today, tomorrow or this_week (defaults to last used)
    #[arg(long, short = 't')]
    timeframe: Option<Timeframe>,

    /// Letterboxd username (defaults to last used)
    #[arg(long, short = 'u')]
    username: Option<String>,

    /// Do not send coordinates, even if a location is configured
    #[arg(long)]
    no_location: bool,

    /// Run one query and print films and error as JSON, without prompts
    #[arg(long)]
    json: bool,

    /// Serve a built-in programme instead of calling the listings source
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config could not be loaded, using defaults");
        AppConfig::default()
    });
    let endpoint = cfg
        .listings_url_or_default()
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    let collator = TitleCollator::new(&cfg.collation_locale_or_default())
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    // --- Adapters ---
    let listings: Arc<dyn ListingsPort> = if cli.offline {
        warn!("offline mode: serving built-in programme");
        Arc::new(MockListingsAdapter::new())
    } else {
        info!(url = %endpoint, "listings source");
        Arc::new(HttpListingsAdapter::new())
    };

    let location = Arc::new(ConfiguredLocation::new(
        cfg.latitude,
        cfg.longitude,
        cfg.location_enabled_or_default(),
    ));
    if cli.no_location {
        location.set_enabled(false).await;
    }

    let prefs_path = cfg.preferences_path();
    info!(path = %prefs_path.display(), "preferences file");
    let prefs: Arc<dyn PreferencesPort> = Arc::new(PrefsJson::new(&prefs_path));

    // --- Service ---
    let service = Arc::new(
        ShowtimeService::new(listings, location, endpoint, collator)
            .with_location_timeout(cfg.geolocation_timeout()),
    );

    // CLI overrides become the new stored preferences
    let stored = prefs.load().await.map_err(|e| anyhow::anyhow!("{}", e))?;
    let current = Preferences {
        username: cli.username.unwrap_or(stored.username),
        timeframe: cli.timeframe.unwrap_or(stored.timeframe),
    };
    if let Err(e) = prefs.save(&current).await {
        warn!(error = %e, "could not persist preferences");
    }

    if cli.json {
        let result = service
            .fetch_films(&current.username, current.timeframe)
            .await;
        println!("{}", serde_json::to_string_pretty(&result)?);
        if result.error.is_some() {
            std::process::exit(1);
        }
        return Ok(());
    }

    le_cinema::adapters::ui::init_ui();

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        Arc::clone(&service),
        Arc::clone(&prefs),
        cfg.native_language_or_default(),
    ));

    // --- Run (timeframe + username -> films -> showtimes) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
