//! Periodic re-fetch of the schedule.
//!
//! Remaining time is only valid at fetch time, and orders can be claimed or
//! dropped meanwhile, so a live schedule view keeps asking the backend. Each
//! pass reloads the scheduled list, then every remaining time, and publishes
//! the whole board on a watch channel.

use std::{sync::Arc, time::Duration};

use cfa_model::TechnicianId;
use tokio::{sync::watch, task::JoinHandle, time::MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::{TechApi, board::ScheduleBoard};

/// Refresh `board` for `technician` every `every` until `cancel` fires or all
/// receivers are dropped.
///
/// The first pass runs immediately. Cancelling stops an in-flight pass too.
pub fn spawn_refresher<A>(
    api: Arc<A>,
    technician: TechnicianId,
    board: ScheduleBoard,
    every: Duration,
    cancel: CancellationToken,
) -> (watch::Receiver<ScheduleBoard>, JoinHandle<()>)
where
    A: TechApi + ?Sized,
{
    let (tx, rx) = watch::channel(board.clone());

    let handle = tokio::spawn(async move {
        let mut board = board;
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("schedule refresher cancelled");
                    break;
                }
                _ = ticker.tick() => {
                    let pass = refresh_pass(Arc::clone(&api), &technician, board.clone());
                    let Some(next) = cancel.run_until_cancelled(pass).await else {
                        debug!("schedule refresher cancelled mid-pass");
                        break;
                    };
                    board = next;
                    if tx.send(board.clone()).is_err() {
                        debug!("no schedule watchers left");
                        break;
                    }
                    debug!(orders = board.len(), "schedule refreshed");
                }
            }
        }
        info!("schedule refresher stopped");
    });

    (rx, handle)
}

/// One pass: reload the order list, then fetch every remaining time.
///
/// A failed list fetch keeps the previous orders.
async fn refresh_pass<A>(api: Arc<A>, technician: &str, board: ScheduleBoard) -> ScheduleBoard
where
    A: TechApi + ?Sized,
{
    let board = match api.scheduled_orders(technician).await {
        Ok(orders) => board.replace_orders(orders),
        Err(e) => {
            warn!(error = %e, "scheduled orders reload failed; keeping previous list");
            board
        }
    };
    crate::board::refresh(api, board).await
}
