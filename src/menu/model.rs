//! Menu view model
//!
//! Pure derivation of what a toggle/menu surface should show for a given
//! state snapshot and saved-device list. No backend calls happen here; a
//! front-end renders the result and maps item activation back onto
//! controller operations.

use crate::core::state::{CameraSource, DeviceState, OrientationAngle, SavedDeviceList};
use serde::Serialize;

/// Subtitle shown while streaming without a known peer address.
const SUBTITLE_STREAMING: &str = "Streaming";
/// Subtitle shown while the daemon is stopped.
const SUBTITLE_READY: &str = "Ready";
/// Placeholder row shown when no devices are saved.
const NO_SAVED_DEVICES: &str = "No saved phones";

/// One selectable menu row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectableItem<T> {
    pub value: T,
    pub label: String,
    /// Rendered as the selection ornament (dot)
    pub selected: bool,
}

/// One row of the saved-device submenu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceEntry {
    pub label: String,
    /// Address to connect to on activation; `None` for the placeholder row
    pub address: Option<String>,
    pub selected: bool,
}

/// Everything a menu surface needs to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuViewModel {
    /// Main toggle checked state (daemon running)
    pub toggle_checked: bool,
    /// Main toggle subtitle: connected ip, "Streaming", or "Ready"
    pub subtitle: String,
    /// Panel indicator shown only while the daemon runs
    pub indicator_visible: bool,
    /// The explicit "turn on" row, shown only while the daemon is off
    pub turn_on_visible: bool,
    /// Advanced controls (sources, orientation, audio) shown iff active
    pub advanced_visible: bool,
    /// Orientation submenu hidden for audio-only streaming
    pub orientation_visible: bool,
    pub camera_items: Vec<SelectableItem<CameraSource>>,
    pub orientation_items: Vec<SelectableItem<OrientationAngle>>,
    /// Mirror/flip switch state
    pub flip_on: bool,
    /// Phone-as-mic switch state
    pub mic_on: bool,
    /// Desktop-audio-to-phone switch state
    pub desktop_audio_on: bool,
    pub devices: Vec<DeviceEntry>,
}

/// Derive the view model for one snapshot. Pure function: same inputs,
/// same output.
pub fn render(state: &DeviceState, saved: &SavedDeviceList) -> MenuViewModel {
    let subtitle = if state.daemon_active {
        state
            .connected_ip()
            .unwrap_or(SUBTITLE_STREAMING)
            .to_string()
    } else {
        SUBTITLE_READY.to_string()
    };

    let camera_items = CameraSource::ALL
        .iter()
        .map(|&source| SelectableItem {
            value: source,
            label: source.label().to_string(),
            selected: state.camera == source,
        })
        .collect();

    let orientation_items = OrientationAngle::ALL
        .iter()
        .map(|&angle| SelectableItem {
            value: angle,
            label: format!("{}\u{b0}", angle.as_str()),
            selected: state.orientation.angle == angle,
        })
        .collect();

    let devices = if saved.is_empty() {
        vec![DeviceEntry {
            label: NO_SAVED_DEVICES.to_string(),
            address: None,
            selected: false,
        }]
    } else {
        saved
            .iter()
            .map(|device| DeviceEntry {
                label: device.address.clone(),
                address: Some(device.address.clone()),
                selected: device.selected,
            })
            .collect()
    };

    MenuViewModel {
        toggle_checked: state.daemon_active,
        subtitle,
        indicator_visible: state.daemon_active,
        turn_on_visible: !state.daemon_active,
        advanced_visible: state.daemon_active,
        orientation_visible: state.camera != CameraSource::None,
        camera_items,
        orientation_items,
        flip_on: state.orientation.flipped,
        mic_on: state.mic_from_phone,
        desktop_audio_on: state.desktop_audio,
        devices,
    }
}
