//! Scheduled orders together with their remaining-time state.
//!
//! Remaining times are fetched per order, concurrently, and each result is
//! folded in with [`ScheduleBoard::apply`]. Updates are keyed by order id, so
//! the final board does not depend on the order in which fetches complete.

use std::sync::Arc;

use cfa_model::{Order, OrderId, RemainingDuration};
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::TechApi;

/// What is known about an order's remaining time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemainingState {
    /// Not fetched yet.
    Pending,
    Known(RemainingDuration),
    /// Last fetch failed; holds the reason.
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct ScheduledEntry {
    pub order: Order,
    pub remaining: RemainingState,
}

impl ScheduledEntry {
    pub fn id(&self) -> Option<&OrderId> {
        self.order.id.as_ref()
    }

    /// Tiered prose, e.g. `"2 days remaining"`.
    pub fn remaining_text(&self) -> Option<String> {
        match &self.remaining {
            RemainingState::Known(d) => Some(d.describe()),
            _ => None,
        }
    }

    /// Compact tokens, e.g. `"2d 3h 15m"`.
    pub fn remaining_compact(&self) -> Option<String> {
        match &self.remaining {
            RemainingState::Known(d) => Some(d.compact()),
            _ => None,
        }
    }
}

/// Result of one remaining-time fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemainingUpdate {
    pub id: OrderId,
    pub state: RemainingState,
}

#[derive(Debug, Clone, Default)]
pub struct ScheduleBoard {
    entries: Vec<ScheduledEntry>,
}

impl ScheduleBoard {
    /// Board in backend order, every entry [`RemainingState::Pending`].
    pub fn new(orders: Vec<Order>) -> Self {
        let entries = orders
            .into_iter()
            .map(|order| ScheduledEntry {
                order,
                remaining: RemainingState::Pending,
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[ScheduledEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &OrderId) -> Option<&ScheduledEntry> {
        self.entries.iter().find(|e| e.id() == Some(id))
    }

    /// Ids of entries that can be addressed on the backend.
    pub fn ids(&self) -> Vec<OrderId> {
        self.entries.iter().filter_map(|e| e.id().cloned()).collect()
    }

    /// Merge one update by id. Unknown ids are ignored; re-applying an update is a no-op.
    pub fn apply(mut self, update: RemainingUpdate) -> Self {
        for entry in self.entries.iter_mut().filter(|e| e.id() == Some(&update.id)) {
            entry.remaining = update.state.clone();
        }
        self
    }

    pub fn apply_all(self, updates: impl IntoIterator<Item = RemainingUpdate>) -> Self {
        updates.into_iter().fold(self, ScheduleBoard::apply)
    }

    /// Swap in a fresh order list, carrying over remaining state for ids still present.
    pub fn replace_orders(self, orders: Vec<Order>) -> Self {
        let carried: Vec<RemainingUpdate> = self
            .entries
            .into_iter()
            .filter_map(|e| {
                let id = e.order.id?;
                Some(RemainingUpdate {
                    id,
                    state: e.remaining,
                })
            })
            .collect();
        ScheduleBoard::new(orders).apply_all(carried)
    }
}

/// Fetch remaining time for every id concurrently, one task per order.
///
/// Failures are captured per order and never abort the others.
pub async fn fetch_remaining<A>(api: Arc<A>, ids: Vec<OrderId>) -> Vec<RemainingUpdate>
where
    A: TechApi + ?Sized,
{
    let mut set = JoinSet::new();
    for id in ids {
        let api = Arc::clone(&api);
        set.spawn(async move {
            let state = match api.remaining_time(&id).await {
                Ok(duration) => RemainingState::Known(duration),
                Err(e) => {
                    warn!(order = %id, error = %e, "remaining time fetch failed");
                    RemainingState::Failed(e.to_string())
                }
            };
            RemainingUpdate { id, state }
        });
    }

    let mut updates = Vec::with_capacity(set.len());
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok(update) => {
                debug!(order = %update.id, "remaining time resolved");
                updates.push(update);
            }
            Err(e) => warn!(error = %e, "remaining time task aborted"),
        }
    }
    updates
}

/// Fetch every entry's remaining time and fold the results into the board.
pub async fn refresh<A>(api: Arc<A>, board: ScheduleBoard) -> ScheduleBoard
where
    A: TechApi + ?Sized,
{
    let updates = fetch_remaining(api, board.ids()).await;
    board.apply_all(updates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ApiError, testing::FakeApi};

    fn board() -> ScheduleBoard {
        ScheduleBoard::new(vec![
            Order::with_id("a"),
            Order::with_id("b"),
            Order::default(),
            Order::with_id("c"),
        ])
    }

    fn known(id: &str, hours: u32, minutes: u32) -> RemainingUpdate {
        RemainingUpdate {
            id: OrderId::from(id),
            state: RemainingState::Known(RemainingDuration::new(hours, minutes)),
        }
    }

    fn states(board: &ScheduleBoard) -> Vec<RemainingState> {
        board.entries().iter().map(|e| e.remaining.clone()).collect()
    }

    #[test]
    fn new_board_is_pending_and_skips_idless_orders_in_ids() {
        let b = board();
        assert_eq!(b.len(), 4);
        assert!(b.entries().iter().all(|e| e.remaining == RemainingState::Pending));
        assert_eq!(
            b.ids(),
            vec![OrderId::from("a"), OrderId::from("b"), OrderId::from("c")]
        );
    }

    #[test]
    fn apply_is_order_independent() {
        let updates = vec![known("a", 1, 0), known("b", 30, 0), known("c", 0, 5)];

        let forward = board().apply_all(updates.clone());
        let backward = board().apply_all(updates.into_iter().rev());
        assert_eq!(states(&forward), states(&backward));
    }

    #[test]
    fn apply_is_idempotent_and_ignores_unknown_ids() {
        let once = board().apply(known("b", 2, 0));
        let twice = board().apply(known("b", 2, 0)).apply(known("b", 2, 0));
        assert_eq!(states(&once), states(&twice));

        let untouched = board().apply(known("zzz", 2, 0));
        assert_eq!(states(&untouched), states(&board()));
    }

    #[test]
    fn entry_renders_both_formats() {
        let b = board().apply(known("a", 27, 5));
        let entry = b.get(&OrderId::from("a")).unwrap();
        assert_eq!(entry.remaining_text().as_deref(), Some("1 day remaining"));
        assert_eq!(entry.remaining_compact().as_deref(), Some("1d 3h 5m"));

        let pending = b.get(&OrderId::from("b")).unwrap();
        assert_eq!(pending.remaining_text(), None);
    }

    #[test]
    fn replace_orders_keeps_state_for_surviving_ids() {
        let b = board().apply(known("a", 1, 0)).apply(known("c", 2, 0));
        let replaced = b.replace_orders(vec![Order::with_id("c"), Order::with_id("d")]);

        assert_eq!(
            replaced.get(&OrderId::from("c")).unwrap().remaining,
            RemainingState::Known(RemainingDuration::new(2, 0))
        );
        assert_eq!(
            replaced.get(&OrderId::from("d")).unwrap().remaining,
            RemainingState::Pending
        );
        assert!(replaced.get(&OrderId::from("a")).is_none());
    }

    #[tokio::test]
    async fn refresh_collects_out_of_order_results() {
        let api = FakeApi::default()
            .with_remaining("a", Ok(RemainingDuration::new(1, 0)), 40)
            .with_remaining("b", Ok(RemainingDuration::new(200, 0)), 0)
            .with_remaining(
                "c",
                Err(ApiError::Status {
                    status: 500,
                    message: "Internal Server Error".to_string(),
                }),
                10,
            );

        let refreshed = refresh(Arc::new(api), board()).await;

        let get = |id: &str| refreshed.get(&OrderId::from(id)).unwrap().remaining.clone();
        assert_eq!(get("a"), RemainingState::Known(RemainingDuration::new(1, 0)));
        assert_eq!(get("b"), RemainingState::Known(RemainingDuration::new(200, 0)));
        assert!(matches!(get("c"), RemainingState::Failed(reason) if reason.contains("500")));
        assert_eq!(refreshed.entries()[2].remaining, RemainingState::Pending);
    }
}
