mod cli;
mod commands;

use tracing_subscriber::EnvFilter;
use twinfield_config::TwinfieldConfig;

use crate::cli::Command;

fn load_config(args: &cli::Args) -> twinfield_common::Result<TwinfieldConfig> {
    let config = match args.config {
        Some(ref path) => twinfield_config::load_config_from(path)?,
        None => twinfield_config::load_config()?,
    };
    Ok(config)
}

/// Build the log filter. An unparsable `--log-level` falls back to the
/// config level and comes back as a warning for stderr.
fn log_filter(directive: Option<&str>, config_level: &str) -> (EnvFilter, Option<String>) {
    let fallback = || EnvFilter::new(format!("twinfield={config_level}"));
    match directive {
        Some(directive) => match EnvFilter::try_new(directive) {
            Ok(filter) => (filter, None),
            Err(e) => (
                fallback(),
                Some(format!(
                    "invalid --log-level {directive:?}: {e}; using twinfield={config_level}"
                )),
            ),
        },
        None => (EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback()), None),
    }
}

#[tokio::main]
async fn main() {
    let args = cli::parse();
    let loaded = load_config(&args);

    // CLI flag, then RUST_LOG, then the level from the config file
    let config_level = loaded
        .as_ref()
        .map(|c| c.logging.level.as_str())
        .unwrap_or("info");
    let (filter, warning) = log_filter(args.log_level.as_deref(), config_level);
    if let Some(warning) = warning {
        eprintln!("{warning}");
    }
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    tracing::debug!("twinfield v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Config load failed: {e}");
            std::process::exit(2);
        }
    };

    let outcome = match args.command {
        Command::Config => {
            commands::show_config(&config);
            Ok(())
        }
        Command::Logon => commands::logon(config).await.map(|_| ()),
        Command::Process { ref file } => commands::process(config, file).await,
    };

    if let Err(e) = outcome {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
