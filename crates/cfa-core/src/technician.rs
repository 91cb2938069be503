use std::{sync::Arc, time::Duration};

use cfa_model::{Order, OrderId, StatusChange, TechnicianId};
use time::UtcOffset;
use tokio::{sync::watch, task::JoinHandle};
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};

use crate::{
    CompensationSummary, CoreError, ScheduleBoard, SecretStore, Session, TechApi, board, refresh,
};

/// Technician workflows on top of a [`TechApi`] and a credential store.
pub struct Technician<A: ?Sized, S> {
    api: Arc<A>,
    session: Session<S>,
    offset: UtcOffset,
}

impl<A, S> Technician<A, S>
where
    A: TechApi + ?Sized,
    S: SecretStore,
{
    pub fn new(api: Arc<A>, store: S) -> Self {
        Self {
            api,
            session: Session::new(store),
            offset: UtcOffset::UTC,
        }
    }

    /// Offset used when rendering service dates.
    pub fn with_offset(mut self, offset: UtcOffset) -> Self {
        self.offset = offset;
        self
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    #[instrument(skip(self, password))]
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<TechnicianId>, CoreError> {
        let token = self.api.login(username, password).await?;
        let user_id = self.session.store_login(&token)?;
        info!(user_id = user_id.as_deref().unwrap_or("unknown"), "logged in");
        Ok(user_id)
    }

    pub fn logout(&self) -> Result<(), CoreError> {
        self.session.logout()?;
        info!("logged out");
        Ok(())
    }

    pub async fn available_orders(&self) -> Result<Vec<Order>, CoreError> {
        self.session.require_token()?;
        Ok(self.api.available_orders().await?)
    }

    /// Put `order` on this technician's schedule.
    #[instrument(skip(self))]
    pub async fn claim(&self, order: &OrderId) -> Result<(), CoreError> {
        self.session.require_token()?;
        let technician = self.session.require_user_id()?;
        self.api.claim_order(order, &technician).await?;
        info!(technician = %technician, "order claimed");
        Ok(())
    }

    pub async fn scheduled_orders(&self) -> Result<Vec<Order>, CoreError> {
        self.session.require_token()?;
        let technician = self.session.require_user_id()?;
        Ok(self.api.scheduled_orders(&technician).await?)
    }

    /// Scheduled orders with remaining times fetched concurrently.
    pub async fn schedule(&self) -> Result<ScheduleBoard, CoreError> {
        let orders = self.scheduled_orders().await?;
        let board = ScheduleBoard::new(orders);
        Ok(board::refresh(Arc::clone(&self.api), board).await)
    }

    /// Keep `board` current in the background; see [`refresh::spawn_refresher`].
    pub fn watch_schedule(
        &self,
        board: ScheduleBoard,
        every: Duration,
        cancel: CancellationToken,
    ) -> Result<(watch::Receiver<ScheduleBoard>, JoinHandle<()>), CoreError> {
        self.session.require_token()?;
        let technician = self.session.require_user_id()?;
        Ok(refresh::spawn_refresher(
            Arc::clone(&self.api),
            technician,
            board,
            every,
            cancel,
        ))
    }

    #[instrument(skip(self))]
    pub async fn change_status(&self, order: &OrderId, status: StatusChange) -> Result<(), CoreError> {
        self.session.require_token()?;
        self.api.update_status(order, status).await?;
        info!(status = status.code(), "order status updated");
        Ok(())
    }

    pub async fn compensation(&self) -> Result<CompensationSummary, CoreError> {
        let orders = self.scheduled_orders().await?;
        Ok(CompensationSummary::from_orders(&orders, self.offset))
    }
}
