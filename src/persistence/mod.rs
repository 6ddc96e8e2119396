//! Persistenz der Layout-Daten über einen injizierbaren Key-Value-Speicher.

mod layout_store;
mod store;

pub use layout_store::{LayoutPersistence, LAYOUT_MODE_KEY, LAYOUT_POSITIONS_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};
