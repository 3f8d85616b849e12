//! Replaying remembered placements onto matched live windows.

use tracing::debug;
use win_winops::{Placement, ShowState, WinOps, WindowHandle};

use crate::{
    matcher::{self, MatchMode},
    snapshot::WindowSnapshot,
};

/// Restore every snapshot in persisted order.
///
/// Per snapshot: minimized snapshots are skipped unconditionally (restore
/// never re-minimizes; captured snapshots are never minimized, so this
/// branch only fires for hand-edited files), unmatched snapshots are
/// skipped, and apply failures are swallowed. One window's failure never
/// blocks the rest; sequencing across snapshots is for determinism only.
pub fn restore_windows(ops: &dyn WinOps, snapshots: &[WindowSnapshot], mode: MatchMode) {
    for snapshot in snapshots {
        if snapshot.placement.show_state == ShowState::Minimized {
            continue;
        }
        let Some(window) = matcher::find_window(ops, snapshot, mode) else {
            debug!(title = %snapshot.title, "no matching live window");
            continue;
        };
        replay_placement(ops, window, &snapshot.placement);
    }
}

/// Apply a remembered placement to a live window, best-effort.
///
/// A maximized placement is applied twice: first forced to `Normal`, which
/// commits the remembered normal rectangle as the window's un-maximize
/// target, then again forced back to `Maximized`. Requesting the maximized
/// state directly would leave the OS holding a stale or default rectangle
/// for the later un-maximize. Anything else is applied once, forced to
/// `Normal`.
pub fn replay_placement(ops: &dyn WinOps, window: WindowHandle, placement: &Placement) {
    let staged = placement.with_state(ShowState::Normal);
    if let Err(e) = ops.set_placement(window, &staged) {
        debug!(window = window.0, "placement apply failed: {e}");
    }
    if placement.show_state == ShowState::Maximized
        && let Err(e) = ops.set_placement(window, &placement.with_state(ShowState::Maximized))
    {
        debug!(window = window.0, "maximize re-apply failed: {e}");
    }
}
