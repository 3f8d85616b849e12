//! Serializable window placement: show state, anchors, and the normal
//! rectangle, mirroring the Win32 `WINDOWPLACEMENT` structure.

/// Win32 show command for a window in its normal state.
pub const SW_SHOWNORMAL: u32 = 1;
/// Win32 show command for a minimized window.
pub const SW_SHOWMINIMIZED: u32 = 2;
/// Win32 show command for a maximized window.
pub const SW_SHOWMAXIMIZED: u32 = 3;

/// A window's display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShowState {
    /// Shown at its normal rectangle.
    #[default]
    Normal,
    /// Minimized to the taskbar.
    Minimized,
    /// Maximized to its screen.
    Maximized,
}

impl ShowState {
    /// Map a raw Win32 show command to a state. Commands other than
    /// minimized/maximized (e.g. `SW_SHOWNOACTIVATE`) fold into `Normal`.
    pub fn from_show_cmd(cmd: u32) -> Self {
        match cmd {
            SW_SHOWMINIMIZED => Self::Minimized,
            SW_SHOWMAXIMIZED => Self::Maximized,
            _ => Self::Normal,
        }
    }

    /// The canonical Win32 show command for this state.
    pub fn show_cmd(self) -> u32 {
        match self {
            Self::Normal => SW_SHOWNORMAL,
            Self::Minimized => SW_SHOWMINIMIZED,
            Self::Maximized => SW_SHOWMAXIMIZED,
        }
    }
}

/// Integer point in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

/// Integer rectangle in screen coordinates, edges inclusive-exclusive as
/// reported by the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge.
    pub left: i32,
    /// Top edge.
    pub top: i32,
    /// Right edge.
    pub right: i32,
    /// Bottom edge.
    pub bottom: i32,
}

impl Rect {
    /// Build a rectangle from its four edges.
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

/// Full geometric/display description of a window.
///
/// `normal_rect` is the rectangle the window occupies (or returns to) in its
/// normal state; the anchors are the positions the OS uses for the
/// minimized/maximized corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placement {
    /// Current display mode.
    pub show_state: ShowState,
    /// Raw `WINDOWPLACEMENT` flags, carried through verbatim.
    pub flags: u32,
    /// Top-left corner used when the window is minimized.
    pub min_anchor: Point,
    /// Top-left corner used when the window is maximized.
    pub max_anchor: Point,
    /// Rectangle used when the window is in its normal state.
    pub normal_rect: Rect,
}

impl Placement {
    /// Placement with the given state and normal rectangle and zeroed
    /// anchors/flags.
    pub fn new(show_state: ShowState, normal_rect: Rect) -> Self {
        Self {
            show_state,
            normal_rect,
            ..Self::default()
        }
    }

    /// Copy of this placement with the show state replaced.
    pub fn with_state(&self, show_state: ShowState) -> Self {
        Self {
            show_state,
            ..*self
        }
    }
}
