//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::oneshot;

use crate::core::state::DisplayState;
use crate::fetch::{FetchError, JsonSource};
use crate::interaction::DisplaySink;

type Reply = Result<Value, FetchError>;

/// A sink that remembers every state it was shown, in order.
#[derive(Default)]
pub struct RecordingSink {
    states: Mutex<Vec<DisplayState>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn states(&self) -> Vec<DisplayState> {
        self.states.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<DisplayState> {
        self.states.lock().unwrap().last().cloned()
    }
}

impl DisplaySink for RecordingSink {
    fn show(&self, state: DisplayState) {
        self.states.lock().unwrap().push(state);
    }
}

/// A source whose replies are queued up front and released by the test.
///
/// Each `fetch_json` call takes the next queued reply, so the n-th request
/// gets the n-th scripted answer.
#[derive(Default)]
pub struct ScriptedSource {
    replies: Mutex<VecDeque<oneshot::Receiver<Reply>>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a reply the test resolves later through the returned sender.
    pub fn push_pending(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.replies.lock().unwrap().push_back(rx);
        tx
    }

    /// Queues a reply that is available immediately.
    pub fn push_ready(&self, reply: Reply) {
        let tx = self.push_pending();
        let _ = tx.send(reply);
    }
}

#[async_trait]
impl JsonSource for ScriptedSource {
    fn endpoint(&self) -> &str {
        "scripted:/api"
    }

    async fn fetch_json(&self) -> Result<Value, FetchError> {
        let next = self.replies.lock().unwrap().pop_front();
        match next {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(FetchError::Network("scripted reply dropped".to_string()))),
            None => Err(FetchError::Network("no scripted reply queued".to_string())),
        }
    }
}
