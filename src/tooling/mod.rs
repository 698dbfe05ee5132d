//! Host-side tooling around the engine.

pub mod inspector;

pub use inspector::ConsoleInspector;
