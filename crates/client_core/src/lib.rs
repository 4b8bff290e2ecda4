//! Client core for the site checkpoint app: the HTTP client talking to the
//! remote attendance endpoint, the in-memory mock roster used by the
//! offline revision, and the background roster poller.

use reqwest::Client;
use thiserror::Error;
use url::Url;

use shared::{
    domain::EmployeeId,
    error::DeniedBody,
    protocol::{EmployeeRecord, EventConfirmation, MovementRecord, RecordEventRequest},
};

pub mod mock;
pub mod poller;
pub mod roster;

pub use mock::MockRoster;
pub use poller::{ClientEvent, RosterPoller};
pub use roster::Employee;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server refused the submission and explained why (non-2xx with a
    /// parseable body). The reason is shown to the worker verbatim.
    #[error("{reason}")]
    Denied { reason: String },
    #[error("endpoint returned unexpected status {status}")]
    UnexpectedStatus { status: u16 },
    #[error("transport failure: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type Result<T, E = ClientError> = std::result::Result<T, E>;

/// Thin client for the two observed calls of the attendance endpoint:
/// `GET` the roster (optionally scoped to one employee's movement log) and
/// `POST` an entry/exit event.
pub struct CheckpointClient {
    http: Client,
    endpoint: Url,
}

impl CheckpointClient {
    pub fn new(endpoint: &str) -> Result<Self> {
        Ok(Self {
            http: Client::new(),
            endpoint: Url::parse(endpoint)?,
        })
    }

    /// Fetches the whole roster. The server returns a denormalized snapshot;
    /// the caller replaces its copy wholesale.
    pub async fn fetch_roster(&self) -> Result<Vec<EmployeeRecord>> {
        let response = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Fetches one employee's recent movement log, most recent first.
    pub async fn fetch_movements(&self, employee_id: EmployeeId) -> Result<Vec<MovementRecord>> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("employee_id", &employee_id.0.to_string());
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    /// Records an entry/exit event. A non-success response with a readable
    /// body becomes [`ClientError::Denied`] carrying the server's reason.
    pub async fn record_event(&self, request: &RecordEventRequest) -> Result<EventConfirmation> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.bytes().await.unwrap_or_default();
        if let Ok(denied) = serde_json::from_slice::<DeniedBody>(&body) {
            return Err(ClientError::Denied {
                reason: denied.reason,
            });
        }
        Err(ClientError::UnexpectedStatus {
            status: status.as_u16(),
        })
    }
}
