//! Sync update definitions

use crate::core::state::{DeviceState, SavedDeviceList};
use serde::Serialize;

/// Composed result of one sync pass, applied to every registered listener.
///
/// The saved list is carried alongside the state rather than inside it:
/// it is owned by the backend's persisted configuration and only
/// cross-referenced against the snapshot's connected address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncUpdate {
    /// Parsed daemon status snapshot
    pub state: DeviceState,
    /// Saved devices with the current connection marked selected
    pub saved: SavedDeviceList,
}

/// Listener callback invoked with every applied update.
///
/// Listeners run while the controller's sync guard is set, so a listener
/// reacting to an applied state (e.g. a toggle widget mirroring a switch)
/// can check the guard and skip issuing a mutation of its own.
pub type UpdateListener = Box<dyn Fn(&SyncUpdate) + Send + Sync>;
