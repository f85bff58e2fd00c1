// Adapters layer: concrete implementations of the collection port.

pub mod memory;
