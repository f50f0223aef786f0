//! Ports (trait boundaries) for external collaborators.
//!
//! The engine owns these traits; progress bars, metrics sinks and other
//! adapters implement them.

pub mod observer;

pub use observer::Observer;
