//! win-winops: Windows window operations for winlay.
//!
//! Wraps the Win32 top-level window walk (`EnumWindows`) and the
//! `GetWindowPlacement`/`SetWindowPlacement` pair behind the [`WinOps`]
//! trait so the engine crate can be driven against a mock in tests.
//!
//! On non-Windows targets the real implementation degrades to a no-op
//! window system: the walk visits nothing and placement writes fail with
//! [`Error::Unsupported`].

mod error;
mod ops;
mod placement;
mod win32;

pub use error::{Error, Result};
pub use ops::{MockWinOps, MockWindow, RealWinOps, WinOps};
pub use placement::{
    Placement, Point, Rect, SW_SHOWMAXIMIZED, SW_SHOWMINIMIZED, SW_SHOWNORMAL, ShowState,
};

/// Opaque handle to a live top-level window.
///
/// For the real implementation this wraps an `HWND`; handles are only
/// meaningful for the duration of the walk that produced them and must not
/// be persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub isize);

/// Visitor decision for a window walk: keep going or stop early.
///
/// The walk is a lazy, finite, non-restartable sequence in OS top-level
/// enumeration order; returning [`Walk::Stop`] aborts it at the current
/// window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    /// Proceed to the next top-level window.
    Continue,
    /// Abort the walk at this window.
    Stop,
}
