use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::{Context, Result, anyhow};
use cfa_client::{ClientConfig, HttpTechApi};
use cfa_core::{FileStore, ScheduleBoard, Technician};
use time::UtcOffset;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::{
    cli::{Cli, Command, LoginArgs},
    output::{CompensationOutput, OrdersOutput, ScheduleOutput, print_output, print_success},
};

type Store = Arc<FileStore>;
type Tech = Technician<HttpTechApi<Store>, Store>;

fn store_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    let home = std::env::var_os("HOME")
        .ok_or_else(|| anyhow!("HOME is not set; pass --store or set CFA_STORE"))?;
    Ok(PathBuf::from(home).join(".cfa-tech").join("credentials.json"))
}

fn technician(cli: &Cli, offset: UtcOffset) -> Result<Tech> {
    let mut config = ClientConfig::from_env().context("invalid client configuration")?;
    if let Some(url) = &cli.api_url {
        config.base_url = url.clone();
    }

    let store = Arc::new(FileStore::open(store_path(cli.store.clone())?));
    debug!(store = %store.path().display(), api = %config.base_url, "client configured");

    let api = HttpTechApi::new(&config, Arc::clone(&store)).context("failed to build http client")?;
    Ok(Technician::new(Arc::new(api), store).with_offset(offset))
}

pub async fn run(cli: Cli, offset: UtcOffset) -> Result<()> {
    let tech = technician(&cli, offset)?;
    let json = cli.json;

    match cli.command {
        Command::Login(LoginArgs { username, password }) => {
            let user_id = tech.login(&username, &password).await.context("login failed")?;
            match user_id {
                Some(id) => print_success(&format!("Logged in as technician {id}"), json),
                None => print_success("Logged in; token carries no technician id", json),
            }
        }
        Command::Logout => {
            tech.logout().context("logout failed")?;
            print_success("Logged out", json);
        }
        Command::Orders => {
            let orders = tech
                .available_orders()
                .await
                .context("failed to list available orders")?;
            print_output(&OrdersOutput { orders, offset }, json);
        }
        Command::Claim { order_id } => {
            tech.claim(&order_id)
                .await
                .with_context(|| format!("failed to claim order {order_id}"))?;
            print_success(&format!("Order {order_id} added to your schedule"), json);
        }
        Command::Schedule { watch: None } => {
            let board = tech.schedule().await.context("failed to load schedule")?;
            print_output(&ScheduleOutput { board: &board, offset }, json);
        }
        Command::Schedule { watch: Some(secs) } => {
            watch_schedule(&tech, Duration::from_secs(secs.max(1)), offset, json).await?;
        }
        Command::Status { order_id, status } => {
            tech.change_status(&order_id, status)
                .await
                .with_context(|| format!("failed to update order {order_id}"))?;
            print_success(&format!("Order {order_id}: {status}"), json);
        }
        Command::Compensation => {
            let summary = tech
                .compensation()
                .await
                .context("failed to load compensation")?;
            print_output(&CompensationOutput(summary), json);
        }
    }
    Ok(())
}

/// Reprint the schedule after every refresh until ctrl-c. The first pass runs
/// immediately and loads the order list.
async fn watch_schedule(tech: &Tech, every: Duration, offset: UtcOffset, json: bool) -> Result<()> {
    let cancel = CancellationToken::new();
    let (mut rx, handle) = tech
        .watch_schedule(ScheduleBoard::default(), every, cancel.clone())
        .context("failed to start schedule refresher")?;
    info!(every_secs = every.as_secs(), "watching schedule; ctrl-c to stop");

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            res = &mut shutdown => {
                res.context("failed to listen for ctrl-c")?;
                break;
            }
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let board = rx.borrow_and_update().clone();
                print_output(&ScheduleOutput { board: &board, offset }, json);
            }
        }
    }

    cancel.cancel();
    handle.await.context("schedule refresher panicked")?;
    Ok(())
}
