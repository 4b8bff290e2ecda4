//! Background roster polling for the live revision: one scheduled task that
//! re-fetches the roster on a fixed interval and broadcasts each snapshot.

use std::{sync::Arc, time::Duration};

use tokio::{sync::broadcast, task::JoinHandle, time};

use shared::protocol::EmployeeRecord;

use crate::CheckpointClient;

#[derive(Debug, Clone)]
pub enum ClientEvent {
    RosterUpdated(Vec<EmployeeRecord>),
}

/// Handle to the polling task. Aborting is tied to this handle's lifetime:
/// dropping it cancels the task, which is how the owning view detaches on
/// teardown.
pub struct RosterPoller {
    events: broadcast::Sender<ClientEvent>,
    task: JoinHandle<()>,
}

impl RosterPoller {
    /// Spawns the poll loop on the current tokio runtime. The first fetch
    /// fires immediately (the "on mount" load), then every `period`.
    ///
    /// Polling is fire-and-forget: a failed fetch is logged at debug level,
    /// nothing is broadcast for it, and the next tick proceeds without
    /// backoff or in-flight deduplication.
    pub fn spawn(client: Arc<CheckpointClient>, period: Duration) -> Self {
        let (events, _) = broadcast::channel(16);
        let sender = events.clone();
        let task = tokio::spawn(async move {
            let mut ticker = time::interval(period);
            loop {
                ticker.tick().await;
                match client.fetch_roster().await {
                    Ok(records) => {
                        let _ = sender.send(ClientEvent::RosterUpdated(records));
                    }
                    Err(err) => {
                        tracing::debug!("roster poll failed, will retry next tick: {err}");
                    }
                }
            }
        });
        Self { events, task }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ClientEvent> {
        self.events.subscribe()
    }
}

impl Drop for RosterPoller {
    fn drop(&mut self) {
        self.task.abort();
    }
}
