//! Status text parsing
//!
//! Decodes the multi-line `Key: value` report printed by a bare `zl-config`
//! call into a [`DeviceState`]. The format is not versioned, so every field
//! degrades to a safe default: a missing key is an empty value, an unknown
//! orientation angle becomes 0, and nothing in here ever returns an error.

use crate::core::state::{CameraSource, DeviceState, Orientation};
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches one report line for the fixed set of status keys.
static STATUS_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(Camera orientation|IP|Cam|Monitor|Desktop|Daemon):\s+(.*)$").unwrap()
});

/// Sentinel the `Daemon` field reports while the service is running.
const DAEMON_ACTIVE: &str = "active";

/// Substrings marking an audio route as enabled. Matched as substrings on
/// purpose: the backend decorates these values with node names and the
/// exact wording has changed between daemon versions.
const ACTIVE_MARKERS: [&str; 2] = ["[ACTIVE]", "[on]"];

/// Parse a raw status report. An empty or garbled input (daemon stopped,
/// query failed) yields the all-off default state.
pub fn parse_status(raw: &str) -> DeviceState {
    let mut ip = "";
    let mut cam = "";
    let mut monitor = "";
    let mut desktop = "";
    let mut daemon = "";
    let mut orientation = "";

    for captures in STATUS_FIELD.captures_iter(raw) {
        let value = captures.get(2).map_or("", |m| m.as_str()).trim();
        match captures.get(1).map_or("", |m| m.as_str()) {
            "IP" => ip = value,
            "Cam" => cam = value,
            "Monitor" => monitor = value,
            "Desktop" => desktop = value,
            "Daemon" => daemon = value,
            "Camera orientation" => orientation = value,
            _ => {}
        }
    }

    DeviceState {
        daemon_active: daemon == DAEMON_ACTIVE,
        ip: ip.to_string(),
        camera: CameraSource::from_token(cam),
        orientation: Orientation::from_token(orientation),
        mic_from_phone: has_active_marker(monitor),
        desktop_audio: has_active_marker(desktop),
    }
}

fn has_active_marker(value: &str) -> bool {
    ACTIVE_MARKERS.iter().any(|marker| value.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::OrientationAngle;

    #[test]
    fn test_parse_full_report() {
        let raw = "Daemon: active\nIP: 10.0.0.5\nCam: back\nCamera orientation: flip90 (Y)\nMonitor: [on]\nDesktop: [off]";
        let state = parse_status(raw);

        assert!(state.daemon_active);
        assert_eq!(state.ip, "10.0.0.5");
        assert_eq!(state.camera, CameraSource::Back);
        assert_eq!(state.orientation.angle, OrientationAngle::Deg90);
        assert!(state.orientation.flipped);
        assert!(state.mic_from_phone);
        assert!(!state.desktop_audio);
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_status(""), DeviceState::default());
    }

    #[test]
    fn test_missing_keys_degrade_to_defaults() {
        // Any subset of keys may be absent; each missing field goes to its default
        let state = parse_status("Daemon: active\nCam: front");
        assert!(state.daemon_active);
        assert_eq!(state.camera, CameraSource::Front);
        assert_eq!(state.ip, "");
        assert_eq!(state.orientation, Orientation::default());
        assert!(!state.mic_from_phone);
        assert!(!state.desktop_audio);

        let state = parse_status("IP: 192.168.1.20");
        assert!(!state.daemon_active);
        assert_eq!(state.ip, "192.168.1.20");
    }

    #[test]
    fn test_daemon_must_equal_active_exactly() {
        assert!(!parse_status("Daemon: inactive").daemon_active);
        assert!(!parse_status("Daemon: activating").daemon_active);
        assert!(parse_status("Daemon: active").daemon_active);
    }

    #[test]
    fn test_audio_markers_are_substring_matched() {
        assert!(parse_status("Monitor: [ACTIVE] zenlink_mic").mic_from_phone);
        assert!(parse_status("Monitor: routing [on] via node 42").mic_from_phone);
        assert!(!parse_status("Monitor: [OFF]").mic_from_phone);
        // Case-sensitive on purpose
        assert!(!parse_status("Desktop: [On]").desktop_audio);
        assert!(parse_status("Desktop: [on]").desktop_audio);
    }

    #[test]
    fn test_cam_key_does_not_swallow_camera_orientation() {
        let state = parse_status("Cam: front\nCamera orientation: 180");
        assert_eq!(state.camera, CameraSource::Front);
        assert_eq!(state.orientation.angle, OrientationAngle::Deg180);
        assert!(!state.orientation.flipped);
    }

    #[test]
    fn test_unknown_orientation_falls_back_to_zero() {
        let state = parse_status("Camera orientation: sideways");
        assert_eq!(state.orientation.angle, OrientationAngle::Deg0);
    }

    #[test]
    fn test_end_to_end_sample() {
        let raw = "Daemon: active\nIP: 10.0.0.5\nCam: back\nCamera orientation: flip90 (Y)\nMonitor: [on]\nDesktop: [off]";
        let state = parse_status(raw);
        assert_eq!(
            state,
            DeviceState {
                daemon_active: true,
                ip: "10.0.0.5".to_string(),
                camera: CameraSource::Back,
                orientation: Orientation::new(OrientationAngle::Deg90, true),
                mic_from_phone: true,
                desktop_audio: false,
            }
        );
    }
}
