//! Backend worker: a dedicated thread running a tokio runtime that executes
//! queued commands against the checkpoint endpoint and pushes UI events
//! back. Also owns the roster poller for the live revision.

use std::{sync::Arc, thread, time::Duration};

use crossbeam_channel::{Receiver, Sender};

use client_core::{CheckpointClient, ClientError, ClientEvent, RosterPoller};
use shared::{domain::CheckpointId, protocol::RecordEventRequest};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Worker-side knobs resolved from settings before launch.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    pub checkpoint_id: CheckpointId,
    pub poll_period: Duration,
}

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, config: WorkerConfig) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(run_worker(cmd_rx, ui_tx, config));
    });
}

struct Session {
    client: Arc<CheckpointClient>,
    // Held so the poll task is aborted when the session is replaced.
    _poller: RosterPoller,
    forward_task: tokio::task::JoinHandle<()>,
}

impl Drop for Session {
    fn drop(&mut self) {
        self.forward_task.abort();
    }
}

async fn run_worker(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, config: WorkerConfig) {
    let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

    let mut session: Option<Session> = None;
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            BackendCommand::Connect { endpoint_url } => {
                tracing::info!(endpoint = %endpoint_url, "backend: connect");
                // Replacing the session drops the previous poller, which
                // aborts its task.
                session = None;
                let client = match CheckpointClient::new(&endpoint_url) {
                    Ok(client) => Arc::new(client),
                    Err(err) => {
                        tracing::error!("backend: connect failed: {err}");
                        let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                            UiErrorContext::Connect,
                            err.to_string(),
                        )));
                        continue;
                    }
                };

                let poller = RosterPoller::spawn(client.clone(), config.poll_period);
                let mut events = poller.subscribe();
                let ui_tx_clone = ui_tx.clone();
                let forward_task = tokio::spawn(async move {
                    while let Ok(event) = events.recv().await {
                        let ClientEvent::RosterUpdated(records) = event;
                        let _ = ui_tx_clone.try_send(UiEvent::RosterRefreshed(records));
                    }
                });

                let _ = ui_tx.try_send(UiEvent::Connected {
                    endpoint: endpoint_url,
                });
                session = Some(Session {
                    client,
                    _poller: poller,
                    forward_task,
                });
            }
            BackendCommand::RefreshRoster => {
                tracing::info!("backend: refresh_roster");
                let Some(session) = session.as_ref() else {
                    continue;
                };
                match session.client.fetch_roster().await {
                    Ok(records) => {
                        let _ = ui_tx.try_send(UiEvent::RosterRefreshed(records));
                    }
                    Err(err) => {
                        tracing::error!("backend: refresh_roster failed: {err}");
                        let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                            UiErrorContext::General,
                            err.to_string(),
                        )));
                    }
                }
            }
            BackendCommand::RecordEvent {
                employee_id,
                event_type,
            } => {
                tracing::info!(
                    employee_id = employee_id.0,
                    event_type = event_type.as_str(),
                    "backend: record_event"
                );
                let Some(session) = session.as_ref() else {
                    continue;
                };
                let request = RecordEventRequest {
                    employee_id,
                    event_type,
                    checkpoint_id: config.checkpoint_id,
                };
                match session.client.record_event(&request).await {
                    Ok(confirmation) => {
                        let _ = ui_tx.try_send(UiEvent::EventRecorded {
                            event_type,
                            employee_name: confirmation.employee_name,
                            is_late: confirmation.is_late.unwrap_or(false),
                        });
                        // A successful submission triggers a full refresh so
                        // the roster reflects the new status immediately.
                        match session.client.fetch_roster().await {
                            Ok(records) => {
                                let _ = ui_tx.try_send(UiEvent::RosterRefreshed(records));
                            }
                            Err(err) => {
                                tracing::debug!("post-event roster refresh failed: {err}");
                            }
                        }
                    }
                    Err(ClientError::Denied { reason }) => {
                        tracing::warn!(employee_id = employee_id.0, "backend: event denied");
                        let _ = ui_tx.try_send(UiEvent::Error(UiError::denied(
                            UiErrorContext::RecordEvent,
                            reason,
                        )));
                    }
                    Err(err) => {
                        tracing::error!("backend: record_event failed: {err}");
                        let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                            UiErrorContext::RecordEvent,
                            err.to_string(),
                        )));
                    }
                }
            }
            BackendCommand::FetchMovements { employee_id } => {
                tracing::info!(employee_id = employee_id.0, "backend: fetch_movements");
                let Some(session) = session.as_ref() else {
                    continue;
                };
                match session.client.fetch_movements(employee_id).await {
                    Ok(movements) => {
                        let _ = ui_tx.try_send(UiEvent::MovementsLoaded {
                            employee_id,
                            movements,
                        });
                    }
                    Err(err) => {
                        tracing::error!("backend: fetch_movements failed: {err}");
                        let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                            UiErrorContext::General,
                            err.to_string(),
                        )));
                    }
                }
            }
        }
    }
}
