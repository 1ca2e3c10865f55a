use tracing::{trace, warn};
use windows::{
    Win32::{
        Foundation::{HWND, LPARAM},
        UI::WindowsAndMessaging::{
            EnumWindows, GetWindowTextLengthW, GetWindowTextW, IsWindowVisible,
        },
    },
    core::BOOL,
};
use winplace_engine::{WindowId, WindowInfo};

/// Snapshot of all visible top-level windows, in enumeration order.
///
/// Untitled windows are included with an empty title; they can only ever
/// match an empty needle.
pub fn list_windows() -> Vec<WindowInfo> {
    trace!("list_windows");
    let mut out: Vec<WindowInfo> = Vec::new();
    if let Err(e) = unsafe {
        EnumWindows(
            Some(enum_windows_proc),
            LPARAM(&mut out as *mut _ as isize),
        )
    } {
        warn!("list_windows: EnumWindows failed: {}", e);
    }
    out
}

/// Collects one visible window per callback invocation.
unsafe extern "system" fn enum_windows_proc(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let out = unsafe { &mut *(lparam.0 as *mut Vec<WindowInfo>) };
    if unsafe { IsWindowVisible(hwnd) }.as_bool() {
        out.push(WindowInfo {
            title: window_title(hwnd),
            id: WindowId::new(hwnd.0 as isize),
        });
    }
    true.into()
}

/// Read a window's title, lossily converted from UTF-16.
fn window_title(hwnd: HWND) -> String {
    let len = unsafe { GetWindowTextLengthW(hwnd) };
    if len <= 0 {
        return String::new();
    }
    let mut buf = vec![0u16; len as usize + 1];
    let copied = unsafe { GetWindowTextW(hwnd, &mut buf) };
    if copied <= 0 {
        return String::new();
    }
    String::from_utf16_lossy(&buf[..copied as usize])
}
