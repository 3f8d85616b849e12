//! The captured record of one window's identity and placement.

use win_winops::Placement;

/// Identity and placement of one window at capture time.
///
/// Snapshots are immutable once captured. A capture pass produces an
/// ordered sequence of them (OS enumeration order) with no uniqueness
/// constraint: duplicate titles and classes are permitted and expected.
///
/// `class_name` and `process_id` are `None` only for snapshots loaded from
/// files that omit them; capture fills them in whenever the OS reports
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSnapshot {
    /// Caption text at capture time; always non-empty for captured
    /// snapshots.
    pub title: String,
    /// OS window-class identifier, used to disambiguate windows sharing a
    /// title.
    pub class_name: Option<String>,
    /// Owning process id, the second disambiguator.
    pub process_id: Option<u32>,
    /// Remembered placement.
    pub placement: Placement,
}
