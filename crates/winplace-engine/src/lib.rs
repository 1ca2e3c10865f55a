//! Core window-acquisition and placement logic for winplace.
//!
//! The flow is: spawn a program through [`DesktopOps`], poll the desktop's
//! window listing until a title matching the program's display name shows up
//! ([`resolver`]), then compute a centered frame on a target monitor's work
//! area and apply it ([`PlacedProgram::place_window`]).
//!
//! All OS interaction goes through the [`DesktopOps`] trait so that the whole
//! crate runs against [`MockDesktopOps`] in tests; the production
//! implementation lives in the `win-winops` crate.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    path::{Path, PathBuf},
};

/// Error type and result alias.
pub mod error;
/// Monitor rectangles and placement geometry.
pub mod geom;
/// Monitor role classification (primary/secondary/other).
pub mod monitor;
/// The injected desktop-capability trait and its test mock.
pub mod ops;
/// Launched-program lifecycle and window placement.
pub mod program;
/// Window-handle resolution by title substring.
pub mod resolver;

pub use error::{Error, Result};
pub use geom::{Frame, MonitorRect, centered_frame};
pub use monitor::{MonitorLayout, MonitorRole, classify};
pub use ops::{DesktopOps, MockDesktopOps};
pub use program::{LaunchHandle, PlaceOptions, PlacedProgram, ResolveSettings};
pub use resolver::{find_match, resolve_window};

/// Opaque identifier for a top-level window.
///
/// Wide enough to carry a Win32 `HWND` payload. The value is only ever
/// produced by a [`DesktopOps`] listing and handed back to the same
/// implementation; once obtained it is treated as valid for the rest of the
/// program's lifetime and never re-validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WindowId(isize);

impl WindowId {
    /// Wrap a raw OS handle value.
    #[must_use]
    pub const fn new(raw: isize) -> Self {
        Self(raw)
    }

    /// The raw OS handle value.
    #[must_use]
    pub const fn raw(self) -> isize {
        self.0
    }
}

impl Display for WindowId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:#x}", self.0)
    }
}

/// One entry of an ephemeral window-listing snapshot: a visible top-level
/// window's title and handle, in the desktop's enumeration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowInfo {
    /// Current window title.
    pub title: String,
    /// Opaque window handle.
    pub id: WindowId,
}

/// An external program invocation: executable path plus arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchCommand {
    /// Path to the executable.
    program: PathBuf,
    /// Arguments passed verbatim.
    args: Vec<String>,
}

impl LaunchCommand {
    /// A command with no arguments.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Replace the argument list.
    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Executable path.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments in order.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Display for LaunchCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
