mod cli;
mod config;
mod logbook;
mod relay;
mod transport;

use clap::Parser;
use cli::Args;
use config::RelayConfig;
use relay::{CommandRelay, RelayError, RelayReport};
use std::process::ExitCode;

use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize tracing; quiet unless something goes wrong
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let relay = CommandRelay::serial(RelayConfig::default());
    debug!(
        "Relay target: {} at {}",
        relay.config().device_path,
        relay.config().framing
    );

    let result = match Args::try_parse() {
        Ok(args) => relay.relay(args.command).await,
        Err(e) if cli::is_informational(&e) => e.exit(),
        Err(e) => {
            let _ = e.print();
            Err(relay.reject(RelayError::InvalidArguments(cli::rejection_reason(&e))))
        }
    };

    if let Ok(report) = &result {
        debug!("Sent {:02X?}", report.frame.as_ref());
    }

    ExitCode::from(exit_status(&result))
}

/// Process exit status for a relay outcome
fn exit_status(result: &Result<RelayReport, RelayError>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(e) => e.exit_code(),
    }
}
