use anyhow::Context;
use clap::Parser;
use faultline_config::FaultlineConfig;

mod cli;
mod input;
mod output;

fn main() {
    if let Err(error) = run() {
        eprintln!("faultline error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = FaultlineConfig::load_with_dotenv().context("failed to load configuration")?;
    let settings = cli.settings(&config);
    init_tracing(&settings.log_level)?;

    tracing::debug!(view = %settings.view, pretty = settings.pretty, "settings resolved");

    let text = input::read_source(cli.input_path())?;
    let faults = input::parse_faults(&text)?;
    tracing::debug!(faults = faults.len(), "input parsed");

    let rendered = output::render_all(&faults, settings.view, settings.pretty)?;
    println!("{rendered}");
    Ok(())
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("FAULTLINE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
