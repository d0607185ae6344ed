use anyhow::Context;
use clap::Parser;

use simple_counter::cli::Cli;
use simple_counter::config::Config;
use simple_counter::logging::init_logging;
use simple_counter::replay::replay;
use simple_counter::shutdown::ShutdownHandle;
use simple_counter::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config_path();
    let mut config = Config::read_from(&config_path)
        .with_context(|| format!("reading config from {}", config_path.display()))?;
    cli.apply_overrides(&mut config);
    config
        .validate()
        .with_context(|| format!("validating config from {}", config_path.display()))?;
    init_logging(&config.logging).context("starting logging")?;

    if let Some(sequence) = cli.replay.as_deref() {
        let view = replay(&config, sequence)?;
        for line in view.to_lines() {
            println!("{line}");
        }
        return Ok(());
    }

    let shutdown = ShutdownHandle::new();
    shutdown
        .install_signal_handlers()
        .context("installing signal handlers")?;

    let count = runtime::run(&config, shutdown).context("running terminal UI")?;
    tracing::info!(count, "exited");
    Ok(())
}
