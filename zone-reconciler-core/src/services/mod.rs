//! Convergence services, leaves first: name normalization, local validation,
//! observed-state snapshots, the diff engine, batch submission, and the
//! lifecycle orchestrator that sequences them.

pub mod diff;
pub mod lifecycle;
pub mod name;
pub mod snapshot;
pub mod submit;
pub mod validate;

pub use lifecycle::ZoneReconciler;
