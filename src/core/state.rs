//! Typed snapshots of ZenLink daemon state

use serde::{Deserialize, Serialize};

/// Video source selected on the phone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraSource {
    /// Back lens
    Back,
    /// Front (selfie) lens
    Front,
    /// Audio-only, no video stream
    #[default]
    None,
}

impl CameraSource {
    /// All sources, in menu order.
    pub const ALL: [CameraSource; 3] = [CameraSource::Back, CameraSource::Front, CameraSource::None];

    /// Decode the backend's `Cam` value. Anything unrecognized (including
    /// an empty string when the daemon is stopped) means no video.
    pub fn from_token(token: &str) -> Self {
        match token {
            "back" => CameraSource::Back,
            "front" => CameraSource::Front,
            _ => CameraSource::None,
        }
    }

    /// Token as passed to `zl-config -c`.
    pub fn token(&self) -> &'static str {
        match self {
            CameraSource::Back => "back",
            CameraSource::Front => "front",
            CameraSource::None => "none",
        }
    }

    /// Human-readable menu label.
    pub fn label(&self) -> &'static str {
        match self {
            CameraSource::Back => "Back",
            CameraSource::Front => "Front",
            CameraSource::None => "No Video (Audio Only)",
        }
    }
}

/// Camera rotation, one of the four right angles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrientationAngle {
    #[default]
    #[serde(rename = "0")]
    Deg0,
    #[serde(rename = "90")]
    Deg90,
    #[serde(rename = "180")]
    Deg180,
    #[serde(rename = "270")]
    Deg270,
}

impl OrientationAngle {
    /// All angles, in menu order.
    pub const ALL: [OrientationAngle; 4] = [
        OrientationAngle::Deg0,
        OrientationAngle::Deg90,
        OrientationAngle::Deg180,
        OrientationAngle::Deg270,
    ];

    /// Decode an angle string. Unknown values fall back to 0 - the status
    /// text is not versioned, so a bad token must never become an error.
    pub fn from_token(token: &str) -> Self {
        match token {
            "90" => OrientationAngle::Deg90,
            "180" => OrientationAngle::Deg180,
            "270" => OrientationAngle::Deg270,
            _ => OrientationAngle::Deg0,
        }
    }

    /// Angle as it appears in backend tokens.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrientationAngle::Deg0 => "0",
            OrientationAngle::Deg90 => "90",
            OrientationAngle::Deg180 => "180",
            OrientationAngle::Deg270 => "270",
        }
    }
}

/// Rotation plus mirror flag, encoded by the backend as a single token
/// (`90` vs `flip90`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orientation {
    pub angle: OrientationAngle,
    pub flipped: bool,
}

impl Orientation {
    pub fn new(angle: OrientationAngle, flipped: bool) -> Self {
        Self { angle, flipped }
    }

    /// Decode a backend orientation value. Only the first whitespace-delimited
    /// token counts; the daemon appends decoration after it.
    pub fn from_token(raw: &str) -> Self {
        let token = raw.split_whitespace().next().unwrap_or("");
        let (flipped, angle) = match token.strip_prefix("flip") {
            Some(rest) => (true, rest),
            None => (false, token),
        };
        Self {
            angle: OrientationAngle::from_token(angle),
            flipped,
        }
    }

    /// Compose the token as passed to `zl-config -o` / `-F` / `-B`.
    pub fn token(&self) -> String {
        if self.flipped {
            format!("flip{}", self.angle.as_str())
        } else {
            self.angle.as_str().to_string()
        }
    }

    /// Parse a user-supplied token, rejecting anything that is not one of
    /// the eight valid values. Unlike [`Orientation::from_token`] this does
    /// not fall back: CLI input should fail loudly, backend output should not.
    pub fn parse_strict(token: &str) -> Option<Self> {
        let decoded = Self::from_token(token);
        (decoded.token() == token).then_some(decoded)
    }
}

/// Parsed snapshot of `zl-config` status output at a point in time.
///
/// Rebuilt on every sync, never persisted. `Default` is the all-off state
/// that a failed or empty status query degrades to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceState {
    /// Whether the daemon reports itself as `active`
    pub daemon_active: bool,
    /// Currently connected device address; empty means disconnected
    pub ip: String,
    /// Selected video source
    pub camera: CameraSource,
    /// Camera rotation and mirror flag
    pub orientation: Orientation,
    /// Phone microphone routed to the desktop
    pub mic_from_phone: bool,
    /// Desktop audio streamed to the phone
    pub desktop_audio: bool,
}

impl DeviceState {
    /// Connected device address, if any.
    pub fn connected_ip(&self) -> Option<&str> {
        if self.ip.is_empty() {
            None
        } else {
            Some(self.ip.as_str())
        }
    }
}

/// One entry of the backend-persisted device list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedDevice {
    pub address: String,
    /// Set iff this address equals the currently connected ip
    pub selected: bool,
}

/// Ordered saved-device addresses, fetched fresh on every sync via
/// `zl-config -L` and cross-referenced against the current connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedDeviceList {
    entries: Vec<SavedDevice>,
}

impl SavedDeviceList {
    /// Build the list from raw `-L` output. Blank lines are dropped; the
    /// entry whose address exactly equals `current_ip` is marked selected.
    /// An empty `current_ip` selects nothing.
    pub fn from_output(raw: &str, current_ip: &str) -> Self {
        let entries = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|address| SavedDevice {
                address: address.to_string(),
                selected: !current_ip.is_empty() && address == current_ip,
            })
            .collect();
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SavedDevice> {
        self.entries.iter()
    }

    /// The selected entry, if the current connection is a saved device.
    pub fn selected(&self) -> Option<&SavedDevice> {
        self.entries.iter().find(|d| d.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_source_tokens() {
        assert_eq!(CameraSource::from_token("back"), CameraSource::Back);
        assert_eq!(CameraSource::from_token("front"), CameraSource::Front);
        assert_eq!(CameraSource::from_token("none"), CameraSource::None);
        assert_eq!(CameraSource::from_token(""), CameraSource::None);
        assert_eq!(CameraSource::from_token("garbage"), CameraSource::None);
    }

    #[test]
    fn test_orientation_round_trip() {
        for token in ["0", "90", "180", "270", "flip0", "flip90", "flip180", "flip270"] {
            let orientation = Orientation::from_token(token);
            assert_eq!(orientation.token(), token, "token {token} must round-trip");
            assert_eq!(orientation.flipped, token.starts_with("flip"));
        }
    }

    #[test]
    fn test_orientation_decoration_and_fallback() {
        // The daemon appends decoration after the token
        let orientation = Orientation::from_token("flip90 (Y)");
        assert_eq!(orientation.angle, OrientationAngle::Deg90);
        assert!(orientation.flipped);

        // Unknown angles fall back to 0, keeping the flip flag
        let orientation = Orientation::from_token("flip45");
        assert_eq!(orientation.angle, OrientationAngle::Deg0);
        assert!(orientation.flipped);

        assert_eq!(Orientation::from_token(""), Orientation::default());
    }

    #[test]
    fn test_orientation_parse_strict() {
        assert_eq!(
            Orientation::parse_strict("flip270"),
            Some(Orientation::new(OrientationAngle::Deg270, true))
        );
        assert_eq!(Orientation::parse_strict("flip45"), None);
        assert_eq!(Orientation::parse_strict("45"), None);
        assert_eq!(Orientation::parse_strict(""), None);
    }

    #[test]
    fn test_saved_list_selection() {
        let list = SavedDeviceList::from_output("1.2.3.4\n5.6.7.8\n", "5.6.7.8");
        assert_eq!(list.len(), 2);
        let selected: Vec<_> = list.iter().filter(|d| d.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].address, "5.6.7.8");
    }

    #[test]
    fn test_saved_list_no_selection_when_disconnected() {
        let list = SavedDeviceList::from_output("1.2.3.4\n5.6.7.8\n", "");
        assert_eq!(list.len(), 2);
        assert!(list.selected().is_none());
    }

    #[test]
    fn test_saved_list_drops_blank_lines() {
        let list = SavedDeviceList::from_output("\n1.2.3.4\n\n  \n5.6.7.8\n\n", "");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_saved_list_empty_output() {
        assert!(SavedDeviceList::from_output("", "").is_empty());
    }

    #[test]
    fn test_device_state_default_is_all_off() {
        let state = DeviceState::default();
        assert!(!state.daemon_active);
        assert!(state.connected_ip().is_none());
        assert_eq!(state.camera, CameraSource::None);
        assert_eq!(state.orientation, Orientation::default());
        assert!(!state.mic_from_phone);
        assert!(!state.desktop_audio);
    }
}
