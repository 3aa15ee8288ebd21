//! Regi POS operator terminal entry point.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::error;

use regi_terminal::config::TerminalConfig;

/// Regi POS operator terminal.
#[derive(Debug, Parser)]
#[command(name = "regi-terminal", version, about)]
struct Cli {
    /// Backend base URL
    #[arg(long, env = "REGI_API_URL")]
    api_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "REGI_API_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Store code attached to purchases
    #[arg(long)]
    store_code: Option<String>,

    /// POS machine id attached to purchases
    #[arg(long)]
    pos_id: Option<String>,

    /// Employee code attached to purchases
    #[arg(long)]
    employee_code: Option<String>,

    /// Path to the terminal config file
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// CLI arguments are the highest-priority config layer.
    fn apply(&self, config: &mut TerminalConfig) {
        if let Some(url) = &self.api_url {
            config.backend.base_url = url.clone();
        }
        if let Some(secs) = self.timeout_secs {
            if secs > 0 {
                config.backend.timeout = Duration::from_secs(secs);
            }
        }
        if let Some(store) = &self.store_code {
            config.identity.store_code = store.clone();
        }
        if let Some(pos) = &self.pos_id {
            config.identity.pos_id = pos.clone();
        }
        if let Some(emp) = &self.employee_code {
            config.identity.employee_code = emp.clone();
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    regi_terminal::init_tracing();

    let cli = Cli::parse();

    let mut config = match TerminalConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "failed to load configuration");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    cli.apply(&mut config);

    match regi_terminal::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "terminal exited with error");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_win() {
        let cli = Cli::parse_from([
            "regi-terminal",
            "--api-url",
            "http://register:9000",
            "--store-code",
            "31",
        ]);

        let mut config = TerminalConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.backend.base_url, "http://register:9000");
        assert_eq!(config.identity.store_code, "31");
        // Untouched layers keep their resolved values
        assert_eq!(config.identity.pos_id, "90");
    }

    #[test]
    fn test_zero_timeout_is_ignored() {
        let cli = Cli::parse_from(["regi-terminal", "--timeout-secs", "0"]);
        let mut config = TerminalConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.backend.timeout, Duration::from_secs(30));
    }
}
