use clap::Parser;
use medtest_cli::{execute, Cli, Clients};
use medtest_core::ClientConfig;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("medtest_cli=warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Usage errors exit here, before any connection is attempted.
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ClientConfig::new(cli.endpoint)?;
    let mut clients = Clients::connect(&config).await?;

    let mut stdout = std::io::stdout().lock();
    execute(cli.command, &mut clients, &mut stdout).await?;

    Ok(())
}
