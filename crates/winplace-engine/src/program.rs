//! Lifecycle of one launched external program and its window.

use std::{sync::Arc, thread, time::Duration};

use crossbeam_channel::{Receiver, bounded};
use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use crate::{DesktopOps, LaunchCommand, MonitorRect, Result, WindowId, geom, resolver};

/// How long and how often the background resolver polls for the window.
#[derive(Clone, Copy, Debug)]
pub struct ResolveSettings {
    /// Total time the resolver keeps polling before giving up.
    pub timeout: Duration,
    /// Pause between window-listing snapshots.
    pub interval: Duration,
}

impl Default for ResolveSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            interval: Duration::from_millis(50),
        }
    }
}

/// Placement parameters: fractional window size plus whether to maximize
/// afterwards.
///
/// Fractions outside `(0, 1]` are passed through unvalidated, matching
/// [`geom::centered_frame`].
#[derive(Clone, Copy, Debug)]
pub struct PlaceOptions {
    /// Window width as a fraction of the monitor's work-area width.
    pub width_pct: f64,
    /// Window height as a fraction of the monitor's work-area height.
    pub height_pct: f64,
    /// Maximize after positioning. The positioning call is issued first
    /// either way, so the sized-and-centered state briefly exists.
    pub maximize: bool,
}

impl Default for PlaceOptions {
    fn default() -> Self {
        Self {
            width_pct: 0.75,
            height_pct: 0.75,
            maximize: true,
        }
    }
}

/// Caller's view of an in-flight window resolution.
///
/// Dropping the handle abandons the wait but not the resolver: the background
/// thread keeps polling until its own deadline either way.
#[derive(Debug)]
pub struct LaunchHandle {
    /// Signalled once with the resolved handle.
    rx: Receiver<WindowId>,
    /// The resolver thread.
    thread: thread::JoinHandle<()>,
}

impl LaunchHandle {
    /// Block up to `timeout` for the window handle. `None` means the window
    /// has not been resolved *yet*; the resolver keeps running and a later
    /// placement may still succeed.
    pub fn wait(&self, timeout: Duration) -> Option<WindowId> {
        self.rx.recv_timeout(timeout).ok()
    }

    /// Wait for the resolver thread to finish, however it finished.
    pub fn join(self) {
        if self.thread.join().is_err() {
            warn!("resolver thread panicked");
        }
    }
}

/// One launched external program: starts the process, resolves its window in
/// the background, and places the window on a target monitor on demand.
///
/// The window cell is written exactly once, by the resolver thread; placement
/// calls only read it. Instances are fully independent of each other.
pub struct PlacedProgram {
    /// Substring matched case-insensitively against window titles.
    name: String,
    /// The program to start.
    command: LaunchCommand,
    /// Work area of the monitor to place the window on.
    monitor: MonitorRect,
    /// Resolver deadline and poll interval.
    settings: ResolveSettings,
    /// Resolved-once window handle.
    hwnd: Arc<OnceCell<WindowId>>,
    /// Injected desktop capabilities.
    ops: Arc<dyn DesktopOps>,
}

impl PlacedProgram {
    /// A program that is not launched yet.
    pub fn new(
        name: impl Into<String>,
        command: LaunchCommand,
        monitor: MonitorRect,
        ops: Arc<dyn DesktopOps>,
    ) -> Self {
        Self {
            name: name.into(),
            command,
            monitor,
            settings: ResolveSettings::default(),
            hwnd: Arc::new(OnceCell::new()),
            ops,
        }
    }

    /// Override the resolver deadline and poll interval.
    #[must_use]
    pub fn with_resolve_settings(mut self, settings: ResolveSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Title substring this program is matched by.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved window handle, if the resolver has found one yet.
    #[must_use]
    pub fn window(&self) -> Option<WindowId> {
        self.hwnd.get().copied()
    }

    /// Start the process and begin resolving its window in the background.
    ///
    /// The process is fire-and-forget; its exit code is never observed. The
    /// returned handle lets the caller wait for resolution with its own
    /// timeout. Spawn failures propagate, resolution failures never do.
    pub fn launch(&self) -> Result<LaunchHandle> {
        debug!("launch: spawning `{}`", self.command);
        self.ops.spawn_program(&self.command)?;

        let (tx, rx) = bounded(1);
        let cell = Arc::clone(&self.hwnd);
        let ops = Arc::clone(&self.ops);
        let name = self.name.clone();
        let settings = self.settings;
        let thread = thread::spawn(move || {
            match resolver::resolve_window(ops.as_ref(), &name, settings.timeout, settings.interval)
            {
                Some(id) => {
                    debug!("launch: '{}' resolved to window {}", name, id);
                    if cell.set(id).is_ok() {
                        drop(tx.send(id));
                    }
                }
                None => {
                    debug!(
                        "launch: '{}' did not appear within {:?}",
                        name, settings.timeout
                    );
                }
            }
        });

        Ok(LaunchHandle { rx, thread })
    }

    /// Place the window on the target monitor: centered at the requested
    /// fractional size, top of the z-order, then maximized if asked.
    ///
    /// A still-unresolved window makes this a silent no-op: a slow-starting
    /// program must not fail the caller. Repeated calls with the same options
    /// issue identical positioning calls.
    pub fn place_window(&self, options: PlaceOptions) -> Result<()> {
        let Some(id) = self.window() else {
            debug!("place_window: '{}' not resolved yet; skipping", self.name);
            return Ok(());
        };

        let frame = geom::centered_frame(&self.monitor, options.width_pct, options.height_pct);
        debug!(
            "place_window: '{}' id={} frame=({},{},{},{}) maximize={}",
            self.name, id, frame.x, frame.y, frame.width, frame.height, options.maximize
        );
        self.ops.set_window_frame(id, frame)?;
        if options.maximize {
            self.ops.show_maximized(id)?;
        }
        Ok(())
    }
}
