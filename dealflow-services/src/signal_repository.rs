//! Read-only signal dataset
//!
//! Signals are loaded once from a JSON array at startup and never written
//! back. A missing dataset file is a valid, empty dataset.

use std::path::Path;

use dealflow_core::{DealflowError, DealflowResult, Signal};
use tracing::{info, warn};

/// In-memory collection of procurement signals
#[derive(Debug, Clone, Default)]
pub struct SignalRepository {
    signals: Vec<Signal>,
}

impl SignalRepository {
    pub fn new(signals: Vec<Signal>) -> Self {
        Self { signals }
    }

    /// Load signals from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> DealflowResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            warn!("Signals file {} not found, starting with no signals", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            DealflowError::io(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let signals: Vec<Signal> = serde_json::from_str(&contents).map_err(|e| {
            DealflowError::parse(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        info!("Loaded {} signals from {}", signals.len(), path.display());
        Ok(Self { signals })
    }

    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}
