/// Adapters (Driven side) - Concrete implementations of the outbound ports
pub mod console;
pub mod filesystem;
