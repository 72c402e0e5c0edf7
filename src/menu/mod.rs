//! Menu module - pure view-model derivation from synced state

pub mod model;

pub use model::{render, DeviceEntry, MenuViewModel, SelectableItem};
