//! Monitor role classification.
//!
//! Roles are derived from each work area's position in virtual-desktop
//! coordinates: the monitor whose work area starts at the origin is the
//! primary one, monitors left of it are secondary, anything else (typically
//! a laptop panel to the right) is other.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::geom::MonitorRect;

/// Where a monitor sits in the desktop arrangement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MonitorRole {
    /// Work area origin is `(0, 0)`.
    Primary,
    /// Left of the primary monitor.
    Secondary,
    /// Everything else.
    Other,
}

impl Display for MonitorRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Other => "other",
        };
        write!(f, "{name}")
    }
}

/// Classify one monitor by the sign of its work-area origin.
#[must_use]
pub fn classify(rect: &MonitorRect) -> MonitorRole {
    if rect.left() == 0 && rect.top() == 0 {
        MonitorRole::Primary
    } else if rect.left() < 0 {
        MonitorRole::Secondary
    } else {
        MonitorRole::Other
    }
}

/// The attached monitors, bucketed by role.
///
/// When several monitors share a role the last one enumerated wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonitorLayout {
    /// The primary monitor's work area, if present.
    primary: Option<MonitorRect>,
    /// The secondary monitor's work area, if present.
    secondary: Option<MonitorRect>,
    /// Any other monitor's work area, if present.
    other: Option<MonitorRect>,
    /// How many monitors were classified.
    count: usize,
}

impl MonitorLayout {
    /// Bucket `monitors` by role.
    #[must_use]
    pub fn classify(monitors: &[MonitorRect]) -> Self {
        let mut layout = Self {
            count: monitors.len(),
            ..Self::default()
        };
        for rect in monitors {
            match classify(rect) {
                MonitorRole::Primary => layout.primary = Some(*rect),
                MonitorRole::Secondary => layout.secondary = Some(*rect),
                MonitorRole::Other => layout.other = Some(*rect),
            }
        }
        layout
    }

    /// The monitor holding `role`, if any.
    #[must_use]
    pub fn role(&self, role: MonitorRole) -> Option<MonitorRect> {
        match role {
            MonitorRole::Primary => self.primary,
            MonitorRole::Secondary => self.secondary,
            MonitorRole::Other => self.other,
        }
    }

    /// Number of monitors classified.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Default placement target: the secondary monitor on a three-monitor
    /// desk, otherwise the primary, falling back to whatever is attached.
    #[must_use]
    pub fn default_target(&self) -> Option<MonitorRect> {
        if self.count == 3 {
            self.secondary.or(self.primary).or(self.other)
        } else {
            self.primary.or(self.secondary).or(self.other)
        }
    }
}
