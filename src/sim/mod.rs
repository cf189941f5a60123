//! Offline fixed-tick driver for stepping the engine through synthetic time.

/// Scenario runner.
pub mod runner;
/// Scenario data model.
pub mod scenario;
