use crate::{ControlError, CoreResult};

use std::{fmt, panic::Location, str::FromStr};

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// One key of a hotkey chord.
///
/// Written in configuration as a short name: `ctrl`, `shift`, `alt`, `meta`,
/// `f1`..`f24`, a single character such as `z`, or a raw virtual key code
/// such as `vk:0x76`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HotkeyKey {
    /// Control modifier.
    Control,
    /// Shift modifier.
    Shift,
    /// Alt modifier.
    Alt,
    /// Windows / Command / Super modifier.
    Meta,
    /// Function key `F1`..`F24`.
    Function(u8),
    /// Character key, stored lowercase for ASCII letters.
    Char(char),
    /// Platform virtual key code passed through unchanged.
    VirtualKey(u32),
}

impl HotkeyKey {
    /// Default recorder hotkey: Ctrl+Z.
    pub fn default_chord() -> Vec<HotkeyKey> {
        vec![HotkeyKey::Control, HotkeyKey::Char('z')]
    }
}

impl FromStr for HotkeyKey {
    type Err = ControlError;

    #[track_caller]
    fn from_str(raw: &str) -> CoreResult<Self> {
        let invalid = || ControlError::InvalidKey {
            name: raw.to_string(),
            location: ErrorLocation::from(Location::caller()),
        };

        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(HotkeyKey::Char(c.to_ascii_lowercase()));
        }

        let name = trimmed.to_ascii_lowercase();
        match name.as_str() {
            "" => Err(invalid()),
            "ctrl" | "control" => Ok(HotkeyKey::Control),
            "shift" => Ok(HotkeyKey::Shift),
            "alt" | "menu" => Ok(HotkeyKey::Alt),
            "meta" | "win" | "super" | "cmd" => Ok(HotkeyKey::Meta),
            _ => {
                if let Some(code) = name.strip_prefix("vk:") {
                    let parsed = match code.strip_prefix("0x") {
                        Some(hex) => u32::from_str_radix(hex, 16),
                        None => code.parse::<u32>(),
                    };
                    return parsed.map(HotkeyKey::VirtualKey).map_err(|_| invalid());
                }
                if let Some(number) = name.strip_prefix('f') {
                    return match number.parse::<u8>() {
                        Ok(n @ 1..=24) => Ok(HotkeyKey::Function(n)),
                        _ => Err(invalid()),
                    };
                }
                Err(invalid())
            }
        }
    }
}

impl TryFrom<String> for HotkeyKey {
    type Error = ControlError;

    fn try_from(value: String) -> CoreResult<Self> {
        value.parse()
    }
}

impl From<HotkeyKey> for String {
    fn from(key: HotkeyKey) -> Self {
        key.to_string()
    }
}

impl fmt::Display for HotkeyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HotkeyKey::Control => f.write_str("ctrl"),
            HotkeyKey::Shift => f.write_str("shift"),
            HotkeyKey::Alt => f.write_str("alt"),
            HotkeyKey::Meta => f.write_str("meta"),
            HotkeyKey::Function(n) => write!(f, "f{}", n),
            HotkeyKey::Char(c) => write!(f, "{}", c),
            HotkeyKey::VirtualKey(code) => write!(f, "vk:0x{:02X}", code),
        }
    }
}
