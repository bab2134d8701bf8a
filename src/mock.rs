//! In-memory device for the component tests.

use std::{cell::RefCell, collections::VecDeque};

use models::{AutoConfig, Mode, ModeFlag, RelaySnapshot, SensorSnapshot};
use reqwest::StatusCode;
use tokio::sync::oneshot;

use crate::{
    api::{paths, DeviceApi},
    error::ApiError,
};

pub enum Reply<T> {
    Ready(Result<T, ApiError>),
    Held(oneshot::Receiver<Result<T, ApiError>>),
}

type Replies<T> = RefCell<VecDeque<Reply<T>>>;

/// Answers requests from per-endpoint queues. An empty GET queue answers 404, an empty
/// POST queue answers success.
#[derive(Default)]
pub struct MockApi {
    pub relay_replies: Replies<RelaySnapshot>,
    pub mode_replies: Replies<ModeFlag>,
    pub config_replies: Replies<AutoConfig>,
    pub sensor_replies: Replies<SensorSnapshot>,
    pub relay_posts: Replies<()>,
    pub mode_posts: Replies<()>,
    pub config_posts: Replies<()>,

    pub calls: RefCell<Vec<String>>,
    pub posted_relays: RefCell<Vec<RelaySnapshot>>,
    pub posted_modes: RefCell<Vec<Mode>>,
    pub posted_configs: RefCell<Vec<AutoConfig>>,
}

pub fn failure(status: u16) -> ApiError {
    ApiError::Status {
        action: "fetch",
        path: "/mock",
        status: StatusCode::from_u16(status).unwrap(),
    }
}

pub fn push<T>(queue: &Replies<T>, result: Result<T, ApiError>) {
    queue.borrow_mut().push_back(Reply::Ready(result));
}

/// Queues a reply that only resolves once the returned sender fires.
pub fn hold<T>(queue: &Replies<T>) -> oneshot::Sender<Result<T, ApiError>> {
    let (tx, rx) = oneshot::channel();
    queue.borrow_mut().push_back(Reply::Held(rx));
    tx
}

async fn answer<T>(queue: &Replies<T>, fallback: Result<T, ApiError>) -> Result<T, ApiError> {
    let reply = queue.borrow_mut().pop_front();
    match reply {
        None => fallback,
        Some(Reply::Ready(result)) => result,
        Some(Reply::Held(rx)) => rx.await.unwrap_or_else(|_| Err(failure(503))),
    }
}

impl MockApi {
    fn record(&self, method: &str, path: &str) {
        self.calls.borrow_mut().push(format!("{method} {path}"));
    }

    pub fn called(&self, call: &str) -> usize {
        self.calls.borrow().iter().filter(|c| *c == call).count()
    }
}

impl DeviceApi for MockApi {
    async fn relay_state(&self) -> Result<RelaySnapshot, ApiError> {
        self.record("GET", paths::RELAY_STATE);
        answer(&self.relay_replies, Err(failure(404))).await
    }

    async fn set_relay_state(&self, snapshot: &RelaySnapshot) -> Result<(), ApiError> {
        self.record("POST", paths::RELAY_STATE);
        self.posted_relays.borrow_mut().push(*snapshot);
        answer(&self.relay_posts, Ok(())).await
    }

    async fn mode(&self) -> Result<ModeFlag, ApiError> {
        self.record("GET", paths::MODE);
        answer(&self.mode_replies, Err(failure(404))).await
    }

    async fn set_mode(&self, mode: Mode) -> Result<(), ApiError> {
        self.record("POST", paths::MODE);
        self.posted_modes.borrow_mut().push(mode);
        answer(&self.mode_posts, Ok(())).await
    }

    async fn config(&self) -> Result<AutoConfig, ApiError> {
        self.record("GET", paths::CONFIG);
        answer(&self.config_replies, Err(failure(404))).await
    }

    async fn set_config(&self, config: &AutoConfig) -> Result<(), ApiError> {
        self.record("POST", paths::CONFIG);
        self.posted_configs.borrow_mut().push(*config);
        answer(&self.config_posts, Ok(())).await
    }

    async fn sensors(&self) -> Result<SensorSnapshot, ApiError> {
        self.record("GET", paths::SENSORS);
        answer(&self.sensor_replies, Err(failure(404))).await
    }
}
