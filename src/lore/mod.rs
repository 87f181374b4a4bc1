//! Narrative-text boundary.
//!
//! The lore generator is an external collaborator consumed behind
//! [`LoreSource`]; everything about it may fail, so the scanner substitutes
//! a fixed placeholder instead of surfacing errors into the simulation.

pub mod archive;

use std::sync::Arc;
use std::thread;

use anyhow::Result;
use crossbeam_channel::{bounded, Receiver, TryRecvError};

use crate::biome::Biome;

pub use archive::ArchiveLoreSource;

/// Generated narrative fragment for a scanned landmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lore {
    pub title: String,
    pub content: String,
}

impl Lore {
    /// Substitute returned whenever generation fails.
    pub fn placeholder() -> Self {
        Self {
            title: "Static Interference".to_string(),
            content: "The data fragment is corrupted. The monolith remains silent.".to_string(),
        }
    }
}

/// Inputs handed to the lore generator on a scan.
#[derive(Debug, Clone)]
pub struct LoreRequest {
    pub biome: Biome,
    pub time_label: &'static str,
    pub landmark: String,
}

/// External lore generator. Implementations may block; the scanner always
/// runs them off-thread.
pub trait LoreSource: Send + Sync + 'static {
    fn generate_lore(&self, request: &LoreRequest) -> Result<Lore>;
}

/// Single-slot scan driver.
///
/// At most one request is in flight: `begin` refuses while busy, and the
/// worker always completes with *some* lore - failures are logged and
/// replaced by the placeholder, never propagated.
pub struct Scanner {
    source: Arc<dyn LoreSource>,
    pending: Option<Receiver<Lore>>,
}

impl Scanner {
    pub fn new(source: Arc<dyn LoreSource>) -> Self {
        Self {
            source,
            pending: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Kick off a scan. Returns false without side effects when one is
    /// already pending.
    pub fn begin(&mut self, request: LoreRequest) -> bool {
        if self.pending.is_some() {
            return false;
        }

        let (tx, rx) = bounded(1);
        let source = Arc::clone(&self.source);
        thread::spawn(move || {
            let lore = source.generate_lore(&request).unwrap_or_else(|err| {
                log::warn!("lore generation failed for {}: {err:#}", request.landmark);
                Lore::placeholder()
            });
            // Receiver may have been dropped; nothing to do then
            let _ = tx.send(lore);
        });

        self.pending = Some(rx);
        true
    }

    /// Non-blocking completion check; clears the busy flag on delivery.
    pub fn poll(&mut self) -> Option<Lore> {
        let rx = self.pending.as_ref()?;
        match rx.try_recv() {
            Ok(lore) => {
                self.pending = None;
                Some(lore)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                // Worker died mid-request; keep the always-succeeds contract
                self.pending = None;
                Some(Lore::placeholder())
            }
        }
    }
}
