use anyhow::Context;
use burplog_core::cli::{ConvertArgs, run_convert};
use burplog_core::config::RunConfig;
use burplog_core::logging::init_logging;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "burplog",
    version,
    about = "Convert a proxy session export into JSON records"
)]
struct Cli {
    #[command(flatten)]
    convert: ConvertArgs,
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    let config = cli.convert.into_config();

    if let Err(e) = run(&config) {
        tracing::error!(error = format!("{e:#}"), "conversion failed");
        eprintln!("burplog error: {e:#}");
        std::process::exit(1);
    }
}

fn run(config: &RunConfig) -> anyhow::Result<()> {
    run_convert(config).context("failed to convert session log")?;
    Ok(())
}
