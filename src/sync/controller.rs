//! State-synchronization control loop
//!
//! Owns the sequencing of backend calls: mutate (optional), re-read status,
//! re-read the saved-device list, apply the composed update to listeners.
//! The backend has no transactional guarantees, so the only consistency
//! tool available is strict ordering plus the re-entrancy guard.

use crate::backend::{commands, parser, CommandRunner};
use crate::core::events::{SyncUpdate, UpdateListener};
use crate::core::state::{CameraSource, Orientation, SavedDeviceList};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Re-entrancy flag for one UI surface, set while a sync is in flight.
///
/// Cloneable handle to per-controller state (not a process-wide global).
/// UI surfaces hold a clone and check [`SyncGuard::is_set`] before issuing
/// a mutation in response to an applied state; that check is what breaks
/// the state-apply -> widget-event -> mutate -> state-apply loop.
#[derive(Clone, Default)]
pub struct SyncGuard {
    flag: Arc<AtomicBool>,
}

impl SyncGuard {
    /// Whether a sync cycle is currently in flight.
    pub fn is_set(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Set the flag for the lifetime of the returned hold. Dropping the
    /// hold clears it unconditionally, so a cancelled sync future cannot
    /// leave the surface stuck busy.
    fn hold(&self) -> GuardHold {
        self.flag.store(true, Ordering::SeqCst);
        GuardHold {
            flag: Arc::clone(&self.flag),
        }
    }
}

struct GuardHold {
    flag: Arc<AtomicBool>,
}

impl Drop for GuardHold {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// Orchestrates state synchronization for one UI surface.
///
/// All operations are serialized through a single-slot queue, so listener
/// updates always apply in the order their triggering calls were issued.
/// Listeners are owned by the controller and invoked synchronously while
/// the guard is set; dropping the controller drops them, which makes any
/// response arriving after teardown a no-op.
pub struct SyncController<R> {
    runner: R,
    guard: SyncGuard,
    serial: tokio::sync::Mutex<()>,
    listeners: parking_lot::Mutex<Vec<UpdateListener>>,
}

impl<R: CommandRunner> SyncController<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            guard: SyncGuard::default(),
            serial: tokio::sync::Mutex::new(()),
            listeners: parking_lot::Mutex::new(Vec::new()),
        }
    }

    /// Handle to this controller's re-entrancy guard.
    pub fn guard(&self) -> SyncGuard {
        self.guard.clone()
    }

    /// Whether a sync cycle is currently in flight.
    pub fn is_syncing(&self) -> bool {
        self.guard.is_set()
    }

    /// Register a listener receiving every applied update.
    pub fn on_update(&self, listener: impl Fn(&SyncUpdate) + Send + Sync + 'static) {
        self.listeners.lock().push(Box::new(listener));
    }

    /// Read-only sync: query status, parse, query the saved list,
    /// cross-reference the connected address, apply to listeners.
    ///
    /// Safe to call repeatedly; against an unchanged backend two calls
    /// produce identical updates.
    pub async fn refresh(&self) -> SyncUpdate {
        let _slot = self.serial.lock().await;
        let _hold = self.guard.hold();
        self.sync_once().await
    }

    /// Issue a mutating command, then run a full sync. The command's own
    /// output is discarded; the re-read is the only source of truth.
    pub async fn mutate_and_refresh(&self, args: Vec<String>) -> SyncUpdate {
        let _slot = self.serial.lock().await;
        let _hold = self.guard.hold();

        if let Err(e) = self.runner.run(&args).await {
            debug!("mutating call {:?} failed: {}", args, e);
        }

        self.sync_once().await
    }

    async fn sync_once(&self) -> SyncUpdate {
        let raw_status = match self.runner.run(&commands::status()).await {
            Ok(output) => output,
            Err(e) => {
                debug!("status query failed: {}", e);
                String::new()
            }
        };
        let state = parser::parse_status(&raw_status);

        let raw_list = match self.runner.run(&commands::saved_list()).await {
            Ok(output) => output,
            Err(e) => {
                debug!("saved-list query failed: {}", e);
                String::new()
            }
        };
        let saved = SavedDeviceList::from_output(&raw_list, &state.ip);

        let update = SyncUpdate { state, saved };
        self.apply(&update);
        update
    }

    fn apply(&self, update: &SyncUpdate) {
        for listener in self.listeners.lock().iter() {
            listener(update);
        }
    }

    // Typed operations covering the backend protocol.

    /// Toggle the daemon on or off (`-t`).
    pub async fn toggle_daemon(&self) -> SyncUpdate {
        self.mutate_and_refresh(commands::toggle_daemon()).await
    }

    /// Connect to the device at `address` (`-i`).
    pub async fn connect(&self, address: &str) -> SyncUpdate {
        self.mutate_and_refresh(commands::connect(address)).await
    }

    /// Select the video source (`-c`).
    pub async fn set_camera(&self, source: CameraSource) -> SyncUpdate {
        self.mutate_and_refresh(commands::set_camera(source)).await
    }

    /// Set rotation and mirroring (`-o`).
    pub async fn set_orientation(&self, orientation: Orientation) -> SyncUpdate {
        self.mutate_and_refresh(commands::set_orientation(orientation))
            .await
    }

    /// Route the phone microphone to the desktop (`-m`).
    pub async fn set_mic(&self, enabled: bool) -> SyncUpdate {
        self.mutate_and_refresh(commands::set_mic(enabled)).await
    }

    /// Stream desktop audio to the phone (`-d`).
    pub async fn set_desktop_audio(&self, enabled: bool) -> SyncUpdate {
        self.mutate_and_refresh(commands::set_desktop_audio(enabled))
            .await
    }

    /// Add an address to the persisted device list (`-A`).
    pub async fn save_device(&self, address: &str) -> SyncUpdate {
        self.mutate_and_refresh(commands::save_device(address)).await
    }

    /// Remove an address from the persisted device list (`-R`).
    pub async fn forget_device(&self, address: &str) -> SyncUpdate {
        self.mutate_and_refresh(commands::forget_device(address))
            .await
    }

    /// Set the default front-lens orientation (`-F`).
    pub async fn set_default_front(&self, orientation: Orientation) -> SyncUpdate {
        self.mutate_and_refresh(commands::set_default_front(orientation))
            .await
    }

    /// Set the default back-lens orientation (`-B`).
    pub async fn set_default_back(&self, orientation: Orientation) -> SyncUpdate {
        self.mutate_and_refresh(commands::set_default_back(orientation))
            .await
    }
}
