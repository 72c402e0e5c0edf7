//! Typed builders for the zl-config argument protocol

use crate::core::state::{CameraSource, Orientation};

/// Status report query (multi-line `Key: value` text).
pub fn status() -> Vec<String> {
    Vec::new()
}

/// Saved-device list query (newline-separated addresses).
pub fn saved_list() -> Vec<String> {
    vec!["-L".into()]
}

/// Toggle the daemon on or off.
pub fn toggle_daemon() -> Vec<String> {
    vec!["-t".into()]
}

/// Connect to the device at `address`.
pub fn connect(address: &str) -> Vec<String> {
    vec!["-i".into(), address.into()]
}

/// Select the video source.
pub fn set_camera(source: CameraSource) -> Vec<String> {
    vec!["-c".into(), source.token().into()]
}

/// Set rotation and mirroring as a single composed token.
pub fn set_orientation(orientation: Orientation) -> Vec<String> {
    vec!["-o".into(), orientation.token()]
}

/// Route the phone microphone to the desktop.
pub fn set_mic(enabled: bool) -> Vec<String> {
    vec!["-m".into(), on_off(enabled).into()]
}

/// Stream desktop audio to the phone.
pub fn set_desktop_audio(enabled: bool) -> Vec<String> {
    vec!["-d".into(), on_off(enabled).into()]
}

/// Add `address` to the persisted device list.
pub fn save_device(address: &str) -> Vec<String> {
    vec!["-A".into(), address.into()]
}

/// Remove `address` from the persisted device list.
pub fn forget_device(address: &str) -> Vec<String> {
    vec!["-R".into(), address.into()]
}

/// Set the default orientation applied when the front lens is selected.
pub fn set_default_front(orientation: Orientation) -> Vec<String> {
    vec!["-F".into(), orientation.token()]
}

/// Set the default orientation applied when the back lens is selected.
pub fn set_default_back(orientation: Orientation) -> Vec<String> {
    vec!["-B".into(), orientation.token()]
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::OrientationAngle;

    #[test]
    fn test_query_args() {
        assert!(status().is_empty());
        assert_eq!(saved_list(), vec!["-L"]);
    }

    #[test]
    fn test_mutation_args() {
        assert_eq!(toggle_daemon(), vec!["-t"]);
        assert_eq!(connect("10.0.0.5"), vec!["-i", "10.0.0.5"]);
        assert_eq!(set_camera(CameraSource::Front), vec!["-c", "front"]);
        assert_eq!(set_mic(true), vec!["-m", "on"]);
        assert_eq!(set_desktop_audio(false), vec!["-d", "off"]);
        assert_eq!(save_device("1.2.3.4"), vec!["-A", "1.2.3.4"]);
        assert_eq!(forget_device("1.2.3.4"), vec!["-R", "1.2.3.4"]);
    }

    #[test]
    fn test_orientation_args_compose_flip_prefix() {
        let flipped = Orientation::new(OrientationAngle::Deg90, true);
        assert_eq!(set_orientation(flipped), vec!["-o", "flip90"]);
        assert_eq!(set_default_front(flipped), vec!["-F", "flip90"]);
        assert_eq!(
            set_default_back(Orientation::new(OrientationAngle::Deg270, false)),
            vec!["-B", "270"]
        );
    }
}
