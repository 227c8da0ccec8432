use chrono::Utc;
use clap::Parser;
use color_eyre::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crime_watch::app::App;
use crime_watch::cli::CliArgs;
use crime_watch::config::AppConfig;
use crime_watch::data::{aggregate, generate};
use crime_watch::{event, logging, terminal};

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let cli = CliArgs::parse();
    cli.apply_env_overrides();

    let config = AppConfig::from_env()?;
    let headless = cli.headless || cli.json || !is_terminal();
    logging::init_logging(&config, headless)?;

    let mut rng = config
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    // The dataset is built once and only read afterwards
    let now = Utc::now();
    let cases = generate(config.case_count, now, &mut rng);
    let stats = aggregate(&cases, now, &mut rng);
    info!(
        cases = cases.len(),
        critical = stats.critical_cases,
        seeded = config.seed.is_some(),
        "generated case data"
    );

    if headless {
        return event::run_headless(&cases, &stats, now, cli.json);
    }

    let mut app = App::new(cases, stats);
    let mut terminal = terminal::setup_terminal()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app);

    // Restore terminal
    terminal::cleanup_terminal_state(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
