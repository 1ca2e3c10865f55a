//! Polling utilities for correlating a launched program with the window it
//! eventually creates.

use std::{
    thread,
    time::{Duration, Instant},
};

use tracing::trace;

use crate::{DesktopOps, WindowId, WindowInfo};

/// Find the handle of the first listed window whose title contains `name`
/// as a case-insensitive substring.
///
/// "First" is by listing order, which is the desktop's enumeration order:
/// arbitrary but deterministic within one snapshot. Returns `None` when no
/// title matches.
#[must_use]
pub fn find_match(windows: &[WindowInfo], name: &str) -> Option<WindowId> {
    let needle = name.to_lowercase();
    windows
        .iter()
        .find(|w| w.title.to_lowercase().contains(&needle))
        .map(|w| w.id)
}

/// Poll `ops` for a window titled like `name` until one appears or `timeout`
/// elapses, sleeping `interval` between polls (never past the deadline).
///
/// The deadline bounds the resolver itself; callers that want a shorter wait
/// impose their own through [`LaunchHandle::wait`](crate::LaunchHandle::wait)
/// and simply stop listening while this keeps polling.
pub fn resolve_window(
    ops: &dyn DesktopOps,
    name: &str,
    timeout: Duration,
    interval: Duration,
) -> Option<WindowId> {
    let start = Instant::now();
    let deadline = start
        .checked_add(timeout)
        .unwrap_or_else(|| start + timeout);

    loop {
        if let Some(id) = find_match(&ops.list_windows(), name) {
            trace!("resolver: '{}' matched window {}", name, id);
            return Some(id);
        }

        if Instant::now() >= deadline {
            trace!("resolver: '{}' not found before deadline", name);
            return None;
        }

        if interval.is_zero() {
            thread::yield_now();
        } else if let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
            thread::sleep(interval.min(remaining));
        } else {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(titles: &[&str]) -> Vec<WindowInfo> {
        titles
            .iter()
            .enumerate()
            .map(|(i, t)| WindowInfo {
                title: (*t).to_string(),
                id: WindowId::new(i as isize + 1),
            })
            .collect()
    }

    #[test]
    fn first_match_in_listing_order_wins() {
        let windows = listing(&["Task Manager", "File Explorer - Documents", "explorer.exe"]);
        // The earlier fuzzy match beats the later literal one.
        assert_eq!(find_match(&windows, "Explorer"), Some(WindowId::new(2)));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let windows = listing(&["NOTEPAD - readme.txt"]);
        assert_eq!(find_match(&windows, "notepad"), Some(WindowId::new(1)));
        assert_eq!(find_match(&windows, "README"), Some(WindowId::new(1)));
    }

    #[test]
    fn no_match_yields_none() {
        let windows = listing(&["Task Manager", "Calculator"]);
        assert_eq!(find_match(&windows, "Explorer"), None);
        assert_eq!(find_match(&[], "anything"), None);
    }

    #[test]
    fn empty_needle_matches_the_first_window() {
        let windows = listing(&["a", "b"]);
        assert_eq!(find_match(&windows, ""), Some(WindowId::new(1)));
    }
}
