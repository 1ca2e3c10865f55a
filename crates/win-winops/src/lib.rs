//! Win32 window operations backend for winplace.
//!
//! Implements [`DesktopOps`] with the real desktop: `EnumWindows` for
//! listings, `SetWindowPos`/`ShowWindow` for placement,
//! `EnumDisplayMonitors` for work areas, and `std::process` for launching.
//! Compiles to nothing on other targets.
#![cfg(target_os = "windows")]

/// Window positioning and maximizing.
mod place;
/// External process launching.
mod process;
/// Monitor work-area enumeration.
mod screen;
/// Visible top-level window enumeration.
mod window;

use winplace_engine::{DesktopOps, Frame, LaunchCommand, MonitorRect, Result, WindowId, WindowInfo};

pub use screen::list_monitors;
pub use window::list_windows;

/// Production [`DesktopOps`] implementation delegating to Win32 calls.
pub struct Win32Ops;

impl DesktopOps for Win32Ops {
    fn spawn_program(&self, command: &LaunchCommand) -> Result<()> {
        process::spawn_program(command)
    }

    fn list_windows(&self) -> Vec<WindowInfo> {
        window::list_windows()
    }

    fn set_window_frame(&self, id: WindowId, frame: Frame) -> Result<()> {
        place::set_window_frame(id, frame)
    }

    fn show_maximized(&self, id: WindowId) -> Result<()> {
        place::show_maximized(id)
    }

    fn list_monitors(&self) -> Vec<MonitorRect> {
        screen::list_monitors()
    }
}
