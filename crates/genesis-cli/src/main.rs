use anyhow::Result;
use clap::Parser;
use genesis_cli::{run, Cli};
use genesis_telemetry::{init_telemetry, TelemetryConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut telemetry = TelemetryConfig::from_env();
    if let Some(level) = &cli.log_level {
        telemetry = telemetry.with_log_level(level.clone());
    }
    if cli.json_logs {
        telemetry = telemetry.with_json_logs(true);
    }
    init_telemetry(&telemetry)?;

    let output = run(&cli.command)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
