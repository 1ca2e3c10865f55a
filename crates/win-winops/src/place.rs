use std::ffi::c_void;

use tracing::debug;
use windows::Win32::{
    Foundation::HWND,
    UI::WindowsAndMessaging::{HWND_TOP, SW_MAXIMIZE, SWP_SHOWWINDOW, SetWindowPos, ShowWindow},
};
use winplace_engine::{Error, Frame, Result, WindowId};

/// Rebuild the Win32 handle from the opaque id.
fn hwnd_from(id: WindowId) -> HWND {
    HWND(id.raw() as *mut c_void)
}

/// Move/resize a window to `frame`: top of the z-order, shown. No
/// activation, no z-order churn beyond "top".
pub fn set_window_frame(id: WindowId, frame: Frame) -> Result<()> {
    debug!(
        "set_window_frame: id={} -> ({},{},{},{})",
        id, frame.x, frame.y, frame.width, frame.height
    );
    unsafe {
        SetWindowPos(
            hwnd_from(id),
            Some(HWND_TOP),
            frame.x,
            frame.y,
            frame.width,
            frame.height,
            SWP_SHOWWINDOW,
        )
    }
    .map_err(|e| Error::OsCall {
        call: "SetWindowPos",
        detail: e.to_string(),
    })
}

/// Maximize a window. Always issued after [`set_window_frame`] so the sized
/// state exists before the maximize supersedes it.
pub fn show_maximized(id: WindowId) -> Result<()> {
    debug!("show_maximized: id={}", id);
    // ShowWindow reports the previous visibility state, not an error.
    unsafe { ShowWindow(hwnd_from(id), SW_MAXIMIZE) };
    Ok(())
}
