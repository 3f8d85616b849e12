//! Top-level window enumeration with capture-eligibility filtering.

use tracing::{debug, trace};
use win_winops::{ShowState, Walk, WinOps};

use crate::snapshot::WindowSnapshot;

/// Titles that are never captured by default: OS-shell pseudo-windows that
/// show up in every enumeration but are not user windows.
pub const DEFAULT_IGNORE_TITLES: &[&str] =
    &["Microsoft Text Input Application", "Program Manager"];

/// Capture-eligibility configuration: a set of exact window titles that
/// must never be captured.
///
/// Passed explicitly into [`capture_windows`]; there is no process-wide
/// mutable ignore state.
#[derive(Debug, Clone)]
pub struct CaptureFilter {
    ignore_titles: Vec<String>,
}

impl Default for CaptureFilter {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORE_TITLES.iter().map(|t| t.to_string()).collect())
    }
}

impl CaptureFilter {
    /// Filter ignoring exactly the given titles.
    pub fn new(ignore_titles: Vec<String>) -> Self {
        Self { ignore_titles }
    }

    /// Extend the ignore list with additional titles.
    pub fn with_extra_titles(mut self, titles: impl IntoIterator<Item = String>) -> Self {
        self.ignore_titles.extend(titles);
        self
    }

    /// Whether `title` exactly matches an ignored title.
    pub fn ignores(&self, title: &str) -> bool {
        self.ignore_titles.iter().any(|t| t == title)
    }
}

/// Produce the ordered sequence of snapshots for all currently eligible
/// top-level windows.
///
/// Eligibility is decided per window, short-circuiting in this order: the
/// window must be visible, have a non-empty title, not match the ignore
/// list, report a placement, and not be minimized. Any per-window query
/// failure skips that window; enumeration itself never fails.
pub fn capture_windows(ops: &dyn WinOps, filter: &CaptureFilter) -> Vec<WindowSnapshot> {
    let mut snapshots = Vec::new();
    ops.walk_windows(&mut |window| {
        if !ops.is_visible(window) {
            return Walk::Continue;
        }
        let Some(title) = ops.title(window) else {
            return Walk::Continue;
        };
        if filter.ignores(&title) {
            trace!(title = %title, "skipping ignored window");
            return Walk::Continue;
        }
        let Some(placement) = ops.placement(window) else {
            debug!(title = %title, "skipping window without placement");
            return Walk::Continue;
        };
        if placement.show_state == ShowState::Minimized {
            return Walk::Continue;
        }
        snapshots.push(WindowSnapshot {
            title,
            class_name: ops.class_name(window),
            process_id: ops.owner_pid(window),
            placement,
        });
        Walk::Continue
    });
    snapshots
}

#[cfg(test)]
mod tests {
    use win_winops::{MockWinOps, MockWindow, Placement, Rect};

    use super::*;

    #[test]
    fn captures_eligible_windows_in_enumeration_order() {
        let ops = MockWinOps::new();
        ops.set_windows(vec![
            MockWindow::new("Editor").with_class("EditClass").with_pid(11),
            MockWindow::new("Browser").with_class("WebClass").with_pid(22),
        ]);
        let snaps = capture_windows(&ops, &CaptureFilter::default());
        assert_eq!(
            snaps.iter().map(|s| s.title.as_str()).collect::<Vec<_>>(),
            vec!["Editor", "Browser"]
        );
        assert_eq!(snaps[0].class_name.as_deref(), Some("EditClass"));
        assert_eq!(snaps[1].process_id, Some(22));
    }

    #[test]
    fn skips_invisible_windows() {
        let ops = MockWinOps::new();
        ops.set_windows(vec![
            MockWindow::new("Hidden").hidden(),
            MockWindow::new("Shown"),
        ]);
        let snaps = capture_windows(&ops, &CaptureFilter::default());
        assert_eq!(snaps.len(), 1);
        assert_eq!(snaps[0].title, "Shown");
    }

    #[test]
    fn skips_titleless_windows() {
        let ops = MockWinOps::new();
        ops.set_windows(vec![MockWindow::new(""), MockWindow::new("Titled")]);
        let snaps = capture_windows(&ops, &CaptureFilter::default());
        assert_eq!(snaps.len(), 1);
        assert!(snaps.iter().all(|s| !s.title.is_empty()));
    }

    #[test]
    fn skips_ignored_titles_regardless_of_other_attributes() {
        let ops = MockWinOps::new();
        ops.set_windows(vec![
            MockWindow::new("Program Manager").with_class("Progman").with_pid(4),
            MockWindow::new("Microsoft Text Input Application"),
            MockWindow::new("Notepad"),
        ]);
        let snaps = capture_windows(&ops, &CaptureFilter::default());
        assert_eq!(snaps.len(), 1);
        assert_eq!(snaps[0].title, "Notepad");
    }

    #[test]
    fn extra_ignore_titles_are_exact_matches() {
        let ops = MockWinOps::new();
        ops.set_windows(vec![
            MockWindow::new("Scratch"),
            MockWindow::new("Scratchpad"),
        ]);
        let filter = CaptureFilter::default().with_extra_titles(["Scratch".to_string()]);
        let snaps = capture_windows(&ops, &filter);
        assert_eq!(snaps.len(), 1);
        assert_eq!(snaps[0].title, "Scratchpad");
    }

    #[test]
    fn skips_windows_without_placement() {
        let ops = MockWinOps::new();
        ops.set_windows(vec![
            MockWindow::new("Broken").without_placement(),
            MockWindow::new("Fine"),
        ]);
        let snaps = capture_windows(&ops, &CaptureFilter::default());
        assert_eq!(snaps.len(), 1);
        assert_eq!(snaps[0].title, "Fine");
    }

    #[test]
    fn never_captures_minimized_windows() {
        let ops = MockWinOps::new();
        ops.set_windows(vec![
            MockWindow::new("Min").with_placement(Placement::new(
                win_winops::ShowState::Minimized,
                Rect::new(0, 0, 100, 100),
            )),
            MockWindow::new("Max").with_placement(Placement::new(
                win_winops::ShowState::Maximized,
                Rect::new(0, 0, 100, 100),
            )),
        ]);
        let snaps = capture_windows(&ops, &CaptureFilter::default());
        assert_eq!(snaps.len(), 1);
        assert!(
            snaps
                .iter()
                .all(|s| s.placement.show_state != win_winops::ShowState::Minimized)
        );
    }

    #[test]
    fn duplicate_titles_are_all_captured() {
        let ops = MockWinOps::new();
        ops.set_windows(vec![
            MockWindow::new("Shell").with_pid(1),
            MockWindow::new("Shell").with_pid(2),
        ]);
        let snaps = capture_windows(&ops, &CaptureFilter::default());
        assert_eq!(snaps.len(), 2);
        assert_eq!(snaps[0].process_id, Some(1));
        assert_eq!(snaps[1].process_id, Some(2));
    }
}
