use mintbank_ledger::MemoryStore;
use mintbank_market::SimulatedFeed;
use std::sync::{Arc, Mutex};

/// Shared application state
/// One lock serializes every store access; the read-modify-write of
/// balance plus history must never interleave
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<MemoryStore>>,
    pub market: Arc<Mutex<SimulatedFeed>>,
}

impl AppState {
    /// State backed by the seeded development store
    pub fn new() -> Self {
        AppState {
            store: Arc::new(Mutex::new(MemoryStore::seeded())),
            market: Arc::new(Mutex::new(SimulatedFeed::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
