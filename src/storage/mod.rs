//! Storage backends for the ship catalog

mod in_memory;

pub use in_memory::InMemoryShipStore;
