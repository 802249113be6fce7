use crate::{CoreResult, HotkeyKey, KeyInjector};

use std::collections::VecDeque;

use tracing::warn;

/// RAII guard that guarantees every pressed chord key is released when dropped.
///
/// Prevents stuck modifiers if an injection between press and release fails.
/// Keys are released in the order they were pressed. On drop, releases are
/// best-effort: the OS resets modifier state on the next physical key event.
pub struct ChordGuard<'a, I: KeyInjector + ?Sized> {
    injector: &'a mut I,
    pressed: VecDeque<HotkeyKey>,
}

impl<'a, I: KeyInjector + ?Sized> ChordGuard<'a, I> {
    /// Create a guard with nothing pressed yet.
    pub fn new(injector: &'a mut I) -> Self {
        Self {
            injector,
            pressed: VecDeque::new(),
        }
    }

    /// Press `key` and remember it for release.
    pub fn press(&mut self, key: HotkeyKey) -> CoreResult<()> {
        self.injector.press(key)?;
        self.pressed.push_back(key);
        Ok(())
    }

    /// Release every held key in press order.
    ///
    /// If a release fails, the keys not yet released are handed to `Drop`.
    pub fn release_all(mut self) -> CoreResult<()> {
        while let Some(key) = self.pressed.pop_front() {
            self.injector.release(key)?;
        }
        Ok(())
    }
}

impl<I: KeyInjector + ?Sized> Drop for ChordGuard<'_, I> {
    fn drop(&mut self) {
        while let Some(key) = self.pressed.pop_front() {
            if let Err(e) = self.injector.release(key) {
                warn!(key = %key, error = ?e, "Failed to release chord key");
            }
        }
    }
}
