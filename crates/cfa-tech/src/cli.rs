//! Command-line arguments for cfa-tech.

use std::path::PathBuf;

use cfa_model::{OrderId, StatusChange};
use cfa_observe::LoggerFormat;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cfa-tech", version, about = "Field technician client for the order backend")]
pub struct Cli {
    /// API root the endpoint paths are appended to.
    #[arg(long, env = "CFA_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Credential file holding the session token and technician id.
    /// Defaults to $HOME/.cfa-tech/credentials.json.
    #[arg(long, env = "CFA_STORE", global = true)]
    pub store: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// More log output; repeat for trace.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log output format: text, json or journald.
    #[arg(long, global = true)]
    pub log_format: Option<LoggerFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and store the session token.
    Login(LoginArgs),

    /// Forget the stored session.
    Logout,

    /// List orders open for claiming.
    Orders,

    /// Put an order on your schedule.
    Claim {
        order_id: OrderId,
    },

    /// Scheduled orders with time remaining until each appointment.
    Schedule {
        /// Keep refreshing every SECS seconds until interrupted.
        #[arg(long, value_name = "SECS")]
        watch: Option<u64>,
    },

    /// Report progress on a scheduled order.
    Status {
        order_id: OrderId,

        /// on-the-way, reschedule or completed.
        status: StatusChange,
    },

    /// Pay owed for scheduled orders.
    Compensation,
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(long)]
    pub username: String,

    #[arg(long, env = "CFA_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_status_aliases() {
        let cli = Cli::try_parse_from(["cfa-tech", "status", "o-1", "en-route", "--json"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Command::Status { order_id, status } => {
                assert_eq!(order_id.as_str(), "o-1");
                assert_eq!(status, StatusChange::OnTheWay);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_status() {
        assert!(Cli::try_parse_from(["cfa-tech", "status", "o-1", "lunch"]).is_err());
    }

    #[test]
    fn schedule_watch_and_verbosity() {
        let cli = Cli::try_parse_from(["cfa-tech", "-vv", "schedule", "--watch", "30"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Schedule { watch: Some(30) }));
    }
}
