//! Process configuration: command-line flags plus environment.

use clap::Parser;

use stockroom_auth::Credentials;
use stockroom_inventory::UpdatePolicy;
use stockroom_observability::LogFormat;

pub const USERNAME_ENV: &str = "STOCKROOM_USERNAME";
pub const PASSWORD_ENV: &str = "STOCKROOM_PASSWORD";

/// Stockroom - in-memory inventory tracker
#[derive(Debug, Default, Parser)]
#[command(name = "stockroom", version)]
pub struct Cli {
    /// Emit logs (on stderr) as JSON instead of text
    #[arg(long)]
    pub json_logs: bool,

    /// Apply multi-field updates all-or-nothing instead of field by field
    #[arg(long)]
    pub atomic_updates: bool,
}

impl Cli {
    pub fn log_format(&self) -> LogFormat {
        if self.json_logs {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub update_policy: UpdatePolicy,
    pub credentials: Credentials,
}

impl Config {
    /// Build from parsed flags and the process environment.
    pub fn load(cli: &Cli) -> Self {
        Self::from_parts(
            cli,
            std::env::var(USERNAME_ENV).ok(),
            std::env::var(PASSWORD_ENV).ok(),
        )
    }

    /// Both credential variables must be set; otherwise the built-in pair is
    /// used.
    pub fn from_parts(cli: &Cli, username: Option<String>, password: Option<String>) -> Self {
        let credentials = match (username, password) {
            (Some(u), Some(p)) if !u.is_empty() => Credentials::single(u, p),
            _ => {
                tracing::warn!(
                    "{USERNAME_ENV}/{PASSWORD_ENV} not set; using insecure built-in credentials"
                );
                Credentials::seeded()
            }
        };

        let update_policy = if cli.atomic_updates {
            UpdatePolicy::Atomic
        } else {
            UpdatePolicy::Sequential
        };

        Self {
            update_policy,
            credentials,
        }
    }
}
