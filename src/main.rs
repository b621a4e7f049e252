use anyhow::Result;
use clap::Parser;
use counter_app::cli::Cli;
use counter_app::logging::init_tracing;
use counter_app::ui::runtime;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.resolve_config()?;
    tracing::info!(?config, "configuration resolved");

    if cli.check {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    runtime::run(&config)?;
    Ok(())
}
