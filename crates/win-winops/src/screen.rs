use std::{ffi::c_void, mem, ptr};

use tracing::{trace, warn};
use windows::{
    Win32::{
        Foundation::{LPARAM, RECT},
        Graphics::Gdi::{EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFO},
    },
    core::BOOL,
};
use winplace_engine::MonitorRect;

/// Work areas of all attached monitors, in enumeration order.
pub fn list_monitors() -> Vec<MonitorRect> {
    trace!("list_monitors");
    let mut out: Vec<MonitorRect> = Vec::new();
    unsafe {
        EnumDisplayMonitors(
            Some(HDC(ptr::null_mut::<c_void>())),
            None,
            Some(monitor_enum_proc),
            LPARAM(&mut out as *mut _ as isize),
        );
    }
    out
}

/// Collects one monitor's work area per callback invocation.
unsafe extern "system" fn monitor_enum_proc(
    hmonitor: HMONITOR,
    _hdc: HDC,
    _lprc_monitor: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    let out = unsafe { &mut *(lparam.0 as *mut Vec<MonitorRect>) };

    let mut mi = MONITORINFO {
        cbSize: mem::size_of::<MONITORINFO>() as u32,
        ..Default::default()
    };

    if unsafe { GetMonitorInfoW(hmonitor, &mut mi) }.as_bool() {
        // rcWork excludes the taskbar, unlike rcMonitor.
        let work = mi.rcWork;
        match MonitorRect::new(work.left, work.top, work.right, work.bottom) {
            Ok(rect) => out.push(rect),
            Err(e) => warn!("list_monitors: skipping degenerate work area: {}", e),
        }
    }

    true.into()
}
