use amarec_control_core::{CoreResult, WindowLister};

/// Top-level window titles from the desktop window manager.
///
/// Only Windows has an implementation. Elsewhere the list is empty, so the
/// recorder is never found and the tool reports "not recording".
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemWindowLister;

#[cfg(windows)]
impl WindowLister for SystemWindowLister {
    #[tracing::instrument(skip(self))]
    fn window_titles(&mut self) -> CoreResult<Vec<String>> {
        win32::window_titles()
    }
}

#[cfg(not(windows))]
impl WindowLister for SystemWindowLister {
    fn window_titles(&mut self) -> CoreResult<Vec<String>> {
        tracing::debug!("Window enumeration is only supported on Windows");
        Ok(Vec::new())
    }
}

#[cfg(windows)]
mod win32 {
    use amarec_control_core::{ControlError, CoreResult};

    use std::panic::Location;

    use error_location::ErrorLocation;
    use tracing::debug;
    use windows::Win32::{
        Foundation::{BOOL, HWND, LPARAM, TRUE},
        UI::WindowsAndMessaging::{EnumWindows, GetWindowTextW},
    };

    /// Longest title read per window, in UTF-16 units.
    const TITLE_CAPACITY: usize = 4096;

    #[track_caller]
    pub(super) fn window_titles() -> CoreResult<Vec<String>> {
        let mut handles: Vec<HWND> = Vec::new();

        // SAFETY: the callback only runs during EnumWindows, while `handles`
        // is alive and exclusively borrowed through the LPARAM.
        unsafe {
            EnumWindows(
                Some(collect_handle),
                LPARAM(&mut handles as *mut Vec<HWND> as isize),
            )
        }
        .map_err(|e| ControlError::WindowEnumeration {
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let titles: Vec<String> = handles.into_iter().map(window_text).collect();

        debug!(window_count = titles.len(), "Top-level windows enumerated");

        Ok(titles)
    }

    unsafe extern "system" fn collect_handle(hwnd: HWND, lparam: LPARAM) -> BOOL {
        // SAFETY: lparam is the `&mut Vec<HWND>` passed by `window_titles`.
        let handles = unsafe { &mut *(lparam.0 as *mut Vec<HWND>) };
        handles.push(hwnd);
        TRUE
    }

    fn window_text(hwnd: HWND) -> String {
        let mut buffer = vec![0u16; TITLE_CAPACITY];
        // SAFETY: hwnd came from EnumWindows; a stale handle yields length 0.
        let len = unsafe { GetWindowTextW(hwnd, &mut buffer) };
        let len = usize::try_from(len).unwrap_or(0);
        String::from_utf16_lossy(&buffer[..len])
    }
}
