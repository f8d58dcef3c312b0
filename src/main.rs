use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinema_seating::{
    cli::{self, Console},
    config::{Config, LogFormat},
    SeatingEngine,
};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logs go to stderr; stdout belongs to the menu
    let filter = tracing_subscriber::EnvFilter::new(&config.app.rust_log);
    match config.app.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }

    info!("Starting cinema seating ({} profile)", config.cinema.profile().name());

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let Some((rows, cols)) = cli::resolve_dimensions(&mut console, &config.cinema)? else {
        info!("Input closed before the auditorium size was given");
        return Ok(());
    };

    let mut rng = match config.cinema.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut engine = SeatingEngine::new(rows, cols, config.cinema.profile(), &mut rng)
        .context("Failed to build the auditorium")?;

    cli::run(&mut console, &mut engine)?;

    info!(
        "Session ended: {} of {} seats occupied ({:.1}%)",
        engine.occupied_count(),
        rows * cols,
        engine.occupancy_rate()
    );
    Ok(())
}
