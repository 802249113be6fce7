//! Hotkey chord injection.
//!
//! A chord is sent by pressing every key in order, waiting a short settle
//! delay so the target application registers the combination, then
//! releasing every key in the same order.

mod chord_guard;
mod key;

pub use {chord_guard::ChordGuard, key::HotkeyKey};

use crate::{CoreResult, KeyInjector};

use std::time::Duration;

use tracing::{debug, instrument};

/// Default hold time between the last press and the first release.
pub const DEFAULT_KEY_SETTLE_DELAY: Duration = Duration::from_millis(16);

/// Send `keys` as one chord through `injector`.
#[instrument(skip(injector))]
pub fn send_hotkey<I: KeyInjector + ?Sized>(
    injector: &mut I,
    keys: &[HotkeyKey],
    settle: Duration,
) -> CoreResult<()> {
    let mut guard = ChordGuard::new(injector);

    for key in keys {
        guard.press(*key)?;
    }

    if !settle.is_zero() {
        std::thread::sleep(settle);
    }

    guard.release_all()?;

    debug!(key_count = keys.len(), "Hotkey chord sent");

    Ok(())
}
