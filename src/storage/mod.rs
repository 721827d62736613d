//! Durable storage for the game.

mod error;
mod persistence;
mod slot;

pub use error::StorageError;
pub use persistence::{Persistence, STATE_KEY};
pub use slot::{FileSlotStore, MemorySlotStore, SlotStore};
