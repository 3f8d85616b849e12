//! Matching a persisted snapshot back to a live window.

use win_winops::{Walk, WinOps, WindowHandle};

use crate::snapshot::WindowSnapshot;

/// Which identity fields a snapshot must share with a live window to
/// match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Title plus class name plus owning process id (the default).
    ///
    /// Fields absent from the snapshot are not compared, so snapshots from
    /// files that omit `ClassName`/`ProcessId` still match on what they
    /// carry. Stricter keying fails to find the same logical window when
    /// it now runs under a different process (e.g. after a restart); that
    /// trade-off is accepted.
    #[default]
    Strict,
    /// Title alone. Ambiguous when several windows share a caption; use
    /// only when class/pid keying is too strict.
    TitleOnly,
}

/// Find the live window corresponding to `snapshot`, or `None` when no
/// window matches (not an error: the window may no longer exist).
///
/// The live window sequence is scanned in OS enumeration order and the
/// scan stops at the first match. Ties among windows with identical
/// title/class/pid are resolved by enumeration order, which callers must
/// treat as undefined.
pub fn find_window(
    ops: &dyn WinOps,
    snapshot: &WindowSnapshot,
    mode: MatchMode,
) -> Option<WindowHandle> {
    let mut found = None;
    ops.walk_windows(&mut |window| {
        if ops.title(window).as_deref() != Some(snapshot.title.as_str()) {
            return Walk::Continue;
        }
        if mode == MatchMode::Strict {
            if let Some(class) = &snapshot.class_name
                && ops.class_name(window).as_deref() != Some(class.as_str())
            {
                return Walk::Continue;
            }
            if let Some(pid) = snapshot.process_id
                && ops.owner_pid(window) != Some(pid)
            {
                return Walk::Continue;
            }
        }
        found = Some(window);
        Walk::Stop
    });
    found
}
