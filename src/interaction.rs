//! # Interaction Handler
//!
//! Binds a trigger to one request/response/render cycle:
//!
//! ```text
//! trigger() ──▶ sink.show(Loading)           (synchronous)
//!           └─▶ spawn: source.fetch_json()
//!                 ├─ Ok(value)  ──▶ sink.show(Success(pretty json))
//!                 └─ Err(e)     ──▶ sink.show(Error(e))
//! ```
//!
//! The handler never looks anything up globally: the source and the sink are
//! handed to the constructor, so tests can drive it without a terminal.
//!
//! Overlapping triggers are not deduplicated. With the default
//! [`StalePolicy::LastResolved`] whichever response arrives last wins the
//! display; [`StalePolicy::LatestTrigger`] drops responses that belong to an
//! older trigger.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

use crate::core::state::DisplayState;
use crate::fetch::{JsonSource, format_payload};

/// Receives every display transition.
pub trait DisplaySink: Send + Sync {
    fn show(&self, state: DisplayState);
}

/// What to do with a response that resolves after a newer trigger fired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StalePolicy {
    /// Apply every response; the last one to resolve wins.
    #[default]
    LastResolved,
    /// Apply only the response of the most recent trigger.
    LatestTrigger,
}

/// Serializes generation bumps with display updates.
///
/// `trigger` bumps and shows `Loading` under the lock; a finished request
/// compares its generation and shows its result under the same lock, so no
/// trigger can slip in between the check and the update. Sinks must not call
/// back into the handler from `show`.
struct DisplayGate {
    sink: Arc<dyn DisplaySink>,
    generation: Mutex<u64>,
}

impl DisplayGate {
    fn lock(&self) -> MutexGuard<'_, u64> {
        self.generation.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self) -> u64 {
        let mut generation = self.lock();
        *generation += 1;
        self.sink.show(DisplayState::Loading);
        *generation
    }

    fn finish(&self, generation: u64, policy: StalePolicy, state: DisplayState) {
        let latest = self.lock();
        if policy == StalePolicy::LatestTrigger && *latest != generation {
            debug!(
                "Discarding response of trigger #{} (latest is #{})",
                generation, *latest
            );
            return;
        }
        debug!("Trigger #{} resolved: {}", generation, state.label());
        self.sink.show(state);
    }
}

#[derive(Clone)]
pub struct InteractionHandler {
    source: Arc<dyn JsonSource>,
    gate: Arc<DisplayGate>,
    policy: StalePolicy,
}

impl InteractionHandler {
    pub fn new(source: Arc<dyn JsonSource>, sink: Arc<dyn DisplaySink>) -> Self {
        Self {
            source,
            gate: Arc::new(DisplayGate {
                sink,
                generation: Mutex::new(0),
            }),
            policy: StalePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: StalePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> StalePolicy {
        self.policy
    }

    #[cfg(test)]
    fn generation(&self) -> u64 {
        *self.gate.lock()
    }

    /// Shows the loading placeholder, then fetches and renders in the background.
    ///
    /// Must be called from within a tokio runtime. The returned handle may be
    /// dropped; the request keeps running.
    pub fn trigger(&self) -> JoinHandle<()> {
        let generation = self.gate.begin();
        info!(
            "Trigger #{} -> {} (policy={:?})",
            generation,
            self.source.endpoint(),
            self.policy
        );

        let source = self.source.clone();
        let gate = self.gate.clone();
        let policy = self.policy;

        tokio::spawn(async move {
            let state = resolve(source.as_ref()).await;
            gate.finish(generation, policy, state);
        })
    }
}

/// Fetches once and turns the outcome into the terminal display state.
pub async fn resolve(source: &dyn JsonSource) -> DisplayState {
    match source.fetch_json().await {
        Ok(value) => DisplayState::Success(format_payload(&value)),
        Err(err) => {
            warn!("Fetch from {} failed: {:?}", source.endpoint(), err);
            DisplayState::Error(err)
        }
    }
}
