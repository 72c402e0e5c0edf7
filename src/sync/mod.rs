//! Sync module - the read-modify-read control loop against zl-config

pub mod controller;

pub use controller::{SyncController, SyncGuard};
