//! Trait abstraction over the desktop's windowing capabilities.
//!
//! The engine never talks to the OS directly; everything flows through
//! [`DesktopOps`] so tests can supply deterministic listings and inspect the
//! calls that were made. The production implementation (`Win32Ops`) lives in
//! the `win-winops` crate.

use std::{
    collections::VecDeque,
    io,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use parking_lot::Mutex;

use crate::{Error, Frame, LaunchCommand, MonitorRect, Result, WindowId, WindowInfo};

/// The external capabilities the engine consumes.
pub trait DesktopOps: Send + Sync {
    /// Start an external program, fire-and-forget. The process is not
    /// monitored afterwards.
    fn spawn_program(&self, command: &LaunchCommand) -> Result<()>;

    /// Snapshot of currently visible top-level windows, in enumeration order.
    fn list_windows(&self) -> Vec<WindowInfo>;

    /// Move/resize a window to `frame`, top of the z-order, shown.
    fn set_window_frame(&self, id: WindowId, frame: Frame) -> Result<()>;

    /// Maximize a window.
    fn show_maximized(&self, id: WindowId) -> Result<()>;

    /// Work areas of all attached monitors.
    fn list_monitors(&self) -> Vec<MonitorRect>;
}

/// Deterministic [`DesktopOps`] double for tests.
///
/// Window listings can be scripted: queued snapshots are served first, one
/// per `list_windows` call, then the steady-state listing applies. Every
/// operation is recorded in a call log for ordering assertions.
#[derive(Clone, Default)]
pub struct MockDesktopOps {
    /// Operation names in call order.
    calls: Arc<Mutex<Vec<String>>>,
    /// Snapshots served before `windows` takes over.
    scripted: Arc<Mutex<VecDeque<Vec<WindowInfo>>>>,
    /// Steady-state window listing.
    windows: Arc<Mutex<Vec<WindowInfo>>>,
    /// Monitor work areas.
    monitors: Arc<Mutex<Vec<MonitorRect>>>,
    /// Recorded `set_window_frame` calls.
    frames: Arc<Mutex<Vec<(WindowId, Frame)>>>,
    /// Recorded `show_maximized` calls.
    maximized: Arc<Mutex<Vec<WindowId>>>,
    /// Force `spawn_program` to fail.
    fail_spawn: Arc<AtomicBool>,
    /// Force `set_window_frame` to fail.
    fail_frame: Arc<AtomicBool>,
}

impl MockDesktopOps {
    /// A mock with no windows, no monitors, and nothing scripted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the steady-state window listing.
    pub fn set_windows(&self, windows: Vec<WindowInfo>) {
        *self.windows.lock() = windows;
    }

    /// Queue a snapshot to be served by the next unserved `list_windows`
    /// call, before the steady-state listing applies.
    pub fn push_listing(&self, windows: Vec<WindowInfo>) {
        self.scripted.lock().push_back(windows);
    }

    /// Set the monitor work areas.
    pub fn set_monitors(&self, monitors: Vec<MonitorRect>) {
        *self.monitors.lock() = monitors;
    }

    /// Whether the call log contains `name`.
    #[must_use]
    pub fn calls_contains(&self, name: &str) -> bool {
        self.calls.lock().iter().any(|c| c == name)
    }

    /// The call log so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// Recorded `set_window_frame` calls, in order.
    #[must_use]
    pub fn frames(&self) -> Vec<(WindowId, Frame)> {
        self.frames.lock().clone()
    }

    /// Recorded `show_maximized` calls, in order.
    #[must_use]
    pub fn maximized(&self) -> Vec<WindowId> {
        self.maximized.lock().clone()
    }

    /// Make `spawn_program` fail.
    pub fn set_fail_spawn(&self, fail: bool) {
        self.fail_spawn.store(fail, Ordering::SeqCst);
    }

    /// Make `set_window_frame` fail.
    pub fn set_fail_frame(&self, fail: bool) {
        self.fail_frame.store(fail, Ordering::SeqCst);
    }

    /// Append to the call log.
    fn note(&self, name: &str) {
        self.calls.lock().push(name.to_string());
    }
}

impl DesktopOps for MockDesktopOps {
    fn spawn_program(&self, command: &LaunchCommand) -> Result<()> {
        self.note("spawn");
        if self.fail_spawn.load(Ordering::SeqCst) {
            return Err(Error::Spawn {
                command: command.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "mock spawn failure"),
            });
        }
        Ok(())
    }

    fn list_windows(&self) -> Vec<WindowInfo> {
        self.note("list_windows");
        if let Some(snapshot) = self.scripted.lock().pop_front() {
            return snapshot;
        }
        self.windows.lock().clone()
    }

    fn set_window_frame(&self, id: WindowId, frame: Frame) -> Result<()> {
        self.note("set_frame");
        if self.fail_frame.load(Ordering::SeqCst) {
            return Err(Error::OsCall {
                call: "set_window_frame",
                detail: "mock failure".to_string(),
            });
        }
        self.frames.lock().push((id, frame));
        Ok(())
    }

    fn show_maximized(&self, id: WindowId) -> Result<()> {
        self.note("maximize");
        self.maximized.lock().push(id);
        Ok(())
    }

    fn list_monitors(&self) -> Vec<MonitorRect> {
        self.note("list_monitors");
        self.monitors.lock().clone()
    }
}
