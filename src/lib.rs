//! ZenLink Companion
//!
//! A Rust controller for the ZenLink phone-streaming daemon, driving its
//! `zl-config` command-line tool and mirroring daemon state.
//!
//! # Features
//! - Invokes zl-config and parses its status report into typed state
//! - Sequences read-modify-read cycles against the transactionless backend
//! - Guards against feedback loops from listener-driven writes
//! - Derives a menu view model (visibility, selection markers, saved devices)
//! - Ships a small CLI front-end for status, watch, and every mutation

pub mod backend;
pub mod core;
pub mod menu;
pub mod sync;

pub use crate::backend::{BackendError, CommandRunner, ZlRunner};
pub use crate::core::config::Config;
pub use crate::core::events::SyncUpdate;
pub use crate::core::state::{
    CameraSource, DeviceState, Orientation, OrientationAngle, SavedDeviceList,
};
pub use crate::menu::MenuViewModel;
pub use crate::sync::{SyncController, SyncGuard};
