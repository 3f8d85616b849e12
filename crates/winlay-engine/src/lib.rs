//! winlay-engine: the window-layout snapshot engine.
//!
//! Captures the placement of all eligible top-level windows into an
//! ordered snapshot sequence, persists it as JSON, and restores it later
//! by matching each snapshot back to a live window and replaying its
//! placement (including the two-phase maximize transition).
//!
//! All OS access goes through the [`win_winops::WinOps`] seam, so the
//! whole engine runs against `MockWinOps` in tests. Execution is
//! single-threaded and synchronous throughout.

use std::path::Path;

use win_winops::WinOps;

mod capture;
mod error;
mod matcher;
mod restore;
mod snapshot;
pub mod store;

pub use capture::{CaptureFilter, DEFAULT_IGNORE_TITLES, capture_windows};
pub use error::{Error, Result};
pub use matcher::{MatchMode, find_window};
pub use restore::{replay_placement, restore_windows};
pub use snapshot::WindowSnapshot;

/// Capture all eligible windows and persist them to `path`.
///
/// Returns the number of windows captured.
pub fn capture_and_save(ops: &dyn WinOps, filter: &CaptureFilter, path: &Path) -> Result<usize> {
    let snapshots = capture_windows(ops, filter);
    store::save(path, &snapshots)?;
    Ok(snapshots.len())
}

/// Load the snapshot sequence from `path` and restore it, best-effort.
///
/// A missing file is an empty sequence, not an error. Returns the number
/// of snapshots processed; unmatched or failed windows are skipped
/// silently per snapshot.
pub fn load_and_restore(ops: &dyn WinOps, mode: MatchMode, path: &Path) -> Result<usize> {
    let snapshots = store::load(path)?;
    restore_windows(ops, &snapshots, mode);
    Ok(snapshots.len())
}
