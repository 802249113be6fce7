use amarec_control_core::{ControlError, CoreResult, HotkeyKey, KeyInjector};

use std::panic::Location;

use enigo::{Direction, Enigo, Key, Keyboard, Settings};
use error_location::ErrorLocation;
use tracing::{info, trace};

/// Global key injection through `enigo`.
///
/// Events go to the foreground input stream, not to a specific window. The
/// recorder must be focused or listening for global hotkeys.
pub struct EnigoKeyInjector {
    enigo: Enigo,
}

impl EnigoKeyInjector {
    /// Create the injector.
    #[track_caller]
    pub(crate) fn new() -> CoreResult<Self> {
        let enigo = Enigo::new(&Settings::default()).map_err(|e| ControlError::KeyInjection {
            reason: format!("Failed to create Enigo: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!("Key injector initialized");

        Ok(Self { enigo })
    }

    #[track_caller]
    fn key(&mut self, key: HotkeyKey, direction: Direction) -> CoreResult<()> {
        let mapped = to_enigo_key(key)?;

        self.enigo
            .key(mapped, direction)
            .map_err(|e| ControlError::KeyInjection {
                reason: format!("Failed to {:?} {}: {}", direction, key, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        trace!(key = %key, direction = ?direction, "Key event injected");

        Ok(())
    }
}

impl KeyInjector for EnigoKeyInjector {
    fn press(&mut self, key: HotkeyKey) -> CoreResult<()> {
        self.key(key, Direction::Press)
    }

    fn release(&mut self, key: HotkeyKey) -> CoreResult<()> {
        self.key(key, Direction::Release)
    }
}

/// Map a chord key onto the `enigo` key it injects.
#[track_caller]
pub(crate) fn to_enigo_key(key: HotkeyKey) -> CoreResult<Key> {
    let unsupported = || ControlError::InvalidKey {
        name: key.to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let mapped = match key {
        HotkeyKey::Control => Key::Control,
        HotkeyKey::Shift => Key::Shift,
        HotkeyKey::Alt => Key::Alt,
        HotkeyKey::Meta => Key::Meta,
        HotkeyKey::Char(c) => Key::Unicode(c),
        HotkeyKey::VirtualKey(code) => Key::Other(code),
        HotkeyKey::Function(n) => function_key(n).ok_or_else(unsupported)?,
    };

    Ok(mapped)
}

fn function_key(n: u8) -> Option<Key> {
    let key = match n {
        1 => Key::F1,
        2 => Key::F2,
        3 => Key::F3,
        4 => Key::F4,
        5 => Key::F5,
        6 => Key::F6,
        7 => Key::F7,
        8 => Key::F8,
        9 => Key::F9,
        10 => Key::F10,
        11 => Key::F11,
        12 => Key::F12,
        13 => Key::F13,
        14 => Key::F14,
        15 => Key::F15,
        16 => Key::F16,
        17 => Key::F17,
        18 => Key::F18,
        19 => Key::F19,
        20 => Key::F20,
        // VK_F21..VK_F24 follow VK_F1 (0x70) contiguously.
        #[cfg(windows)]
        21..=24 => Key::Other(0x6F + u32::from(n)),
        _ => return None,
    };
    Some(key)
}
