use std::io;

use thiserror::Error;

/// Errors surfaced by launch and placement operations.
///
/// A window that never appears is deliberately *not* an error: resolution
/// timeouts degrade to a skipped placement (see
/// [`PlacedProgram::place_window`](crate::PlacedProgram::place_window)).
#[derive(Debug, Error)]
pub enum Error {
    /// The external program could not be started.
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        /// The command line that failed to start.
        command: String,
        /// The spawn error reported by the OS.
        #[source]
        source: io::Error,
    },

    /// A monitor rectangle violated `right > left && bottom > top`.
    #[error("invalid monitor rect: left={left} top={top} right={right} bottom={bottom}")]
    InvalidMonitorRect {
        /// Left edge in virtual-desktop coordinates.
        left: i32,
        /// Top edge in virtual-desktop coordinates.
        top: i32,
        /// Right edge in virtual-desktop coordinates.
        right: i32,
        /// Bottom edge in virtual-desktop coordinates.
        bottom: i32,
    },

    /// A windowing call failed in the OS backend.
    #[error("{call} failed: {detail}")]
    OsCall {
        /// Name of the failing OS call.
        call: &'static str,
        /// Backend-reported failure detail.
        detail: String,
    },
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
