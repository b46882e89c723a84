//! Best score tracking
//!
//! A single integer persisted through a `ScoreStore` (LocalStorage on web).

use std::cell::Cell;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage unavailable")]
    Unavailable,
    #[error("Storage rejected the write: {0}")]
    Write(String),
}

/// Persistence slot for the best score
pub trait ScoreStore {
    /// Stored best score, if any
    fn load(&self) -> Option<u32>;
    /// Overwrite the stored best score
    fn save(&self, score: u32) -> Result<(), StoreError>;
}

/// In-memory store (native builds and tests)
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Cell<Option<u32>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(score: u32) -> Self {
        Self {
            value: Cell::new(Some(score)),
        }
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Option<u32> {
        self.value.get()
    }

    fn save(&self, score: u32) -> Result<(), StoreError> {
        self.value.set(Some(score));
        Ok(())
    }
}

/// LocalStorage-backed store (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "preciseStackerHighScore";

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalStorageStore {
    fn load(&self) -> Option<u32> {
        let json = Self::storage()?.get_item(Self::STORAGE_KEY).ok()??;
        serde_json::from_str(&json).ok()
    }

    fn save(&self, score: u32) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        let json = score.to_string();
        storage
            .set_item(Self::STORAGE_KEY, &json)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}

/// Best score seen so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScore {
    pub best: u32,
}

impl HighScore {
    /// Read the best score from a store (zero when absent)
    pub fn load(store: &impl ScoreStore) -> Self {
        let best = store.load().unwrap_or(0);
        log::info!("Loaded high score: {}", best);
        Self { best }
    }

    /// Record a score; saves and returns true when it beats the best
    ///
    /// A failed save is logged and the in-memory best still updates.
    pub fn record(&mut self, score: u32, store: &impl ScoreStore) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        if let Err(e) = store.save(score) {
            log::warn!("Could not save high score: {}", e);
        }
        true
    }
}
