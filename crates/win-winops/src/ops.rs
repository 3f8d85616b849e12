//! Trait abstraction over window operations to improve testability.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{Error, Placement, Result, ShowState, Walk, WindowHandle, win32};

/// Window system operations the engine depends on.
///
/// `walk_windows` drives the OS top-level window walk; the remaining
/// methods are per-window queries whose failures are reported as `None`
/// so callers can skip the window and keep going.
pub trait WinOps: Send + Sync {
    /// Visit every top-level window in OS enumeration order until `visit`
    /// returns [`Walk::Stop`] or the sequence is exhausted.
    fn walk_windows(&self, visit: &mut dyn FnMut(WindowHandle) -> Walk);

    /// Whether the window is currently visible to the user.
    fn is_visible(&self, window: WindowHandle) -> bool;

    /// The window's caption text; `None` when empty or unavailable.
    fn title(&self, window: WindowHandle) -> Option<String>;

    /// The window's class identifier, when available.
    fn class_name(&self, window: WindowHandle) -> Option<String>;

    /// Identifier of the process owning the window, when available.
    fn owner_pid(&self, window: WindowHandle) -> Option<u32>;

    /// The window's current placement, when the OS reports one.
    fn placement(&self, window: WindowHandle) -> Option<Placement>;

    /// Apply `placement` to the window.
    fn set_placement(&self, window: WindowHandle, placement: &Placement) -> Result<()>;
}

/// Production implementation delegating to the Win32 layer.
pub struct RealWinOps;

impl WinOps for RealWinOps {
    fn walk_windows(&self, visit: &mut dyn FnMut(WindowHandle) -> Walk) {
        win32::walk_windows(visit);
    }
    fn is_visible(&self, window: WindowHandle) -> bool {
        win32::is_visible(window)
    }
    fn title(&self, window: WindowHandle) -> Option<String> {
        win32::title(window)
    }
    fn class_name(&self, window: WindowHandle) -> Option<String> {
        win32::class_name(window)
    }
    fn owner_pid(&self, window: WindowHandle) -> Option<u32> {
        win32::owner_pid(window)
    }
    fn placement(&self, window: WindowHandle) -> Option<Placement> {
        win32::placement(window)
    }
    fn set_placement(&self, window: WindowHandle, placement: &Placement) -> Result<()> {
        win32::set_placement(window, placement)
    }
}

/// One fake top-level window held by [`MockWinOps`].
#[derive(Debug, Clone)]
pub struct MockWindow {
    /// Caption text; an empty string models a titleless window.
    pub title: String,
    /// Window class identifier.
    pub class_name: String,
    /// Owning process id.
    pub pid: u32,
    /// Whether the window is visible.
    pub visible: bool,
    /// Current placement; `None` models a placement query failure.
    pub placement: Option<Placement>,
    /// When set, `set_placement` on this window fails.
    pub fail_set_placement: bool,
}

impl MockWindow {
    /// Visible window with the given title and a default normal placement.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            class_name: String::new(),
            pid: 0,
            visible: true,
            placement: Some(Placement::default()),
            fail_set_placement: false,
        }
    }

    /// Set the window class.
    pub fn with_class(mut self, class_name: &str) -> Self {
        self.class_name = class_name.to_string();
        self
    }

    /// Set the owning process id.
    pub fn with_pid(mut self, pid: u32) -> Self {
        self.pid = pid;
        self
    }

    /// Set the current placement.
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }

    /// Mark the window invisible.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Make the placement query fail for this window.
    pub fn without_placement(mut self) -> Self {
        self.placement = None;
        self
    }

    /// Make `set_placement` fail for this window.
    pub fn failing_set_placement(mut self) -> Self {
        self.fail_set_placement = true;
        self
    }
}

/// In-memory mock window system for tests.
///
/// Handles index into the window list, so enumeration order is the list
/// order. `set_placement` records each call (handle plus requested show
/// state) and, unless failure is injected, stores the placement so tests
/// can assert final window state.
#[derive(Clone, Default)]
pub struct MockWinOps {
    windows: Arc<Mutex<Vec<MockWindow>>>,
    set_calls: Arc<Mutex<Vec<(WindowHandle, ShowState)>>>,
}

impl MockWinOps {
    /// Empty mock window system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the window list.
    pub fn set_windows(&self, windows: Vec<MockWindow>) {
        let mut g = self.windows.lock();
        *g = windows;
    }

    /// Current placement of the window at `index`.
    pub fn placement_at(&self, index: usize) -> Option<Placement> {
        self.windows.lock().get(index).and_then(|w| w.placement)
    }

    /// Every `set_placement` call made so far, in order.
    pub fn set_placement_calls(&self) -> Vec<(WindowHandle, ShowState)> {
        self.set_calls.lock().clone()
    }

    fn with_window<T>(&self, window: WindowHandle, f: impl FnOnce(&MockWindow) -> T) -> Option<T> {
        self.windows.lock().get(window.0 as usize).map(f)
    }
}

impl WinOps for MockWinOps {
    fn walk_windows(&self, visit: &mut dyn FnMut(WindowHandle) -> Walk) {
        let count = self.windows.lock().len();
        for i in 0..count {
            if visit(WindowHandle(i as isize)) == Walk::Stop {
                break;
            }
        }
    }
    fn is_visible(&self, window: WindowHandle) -> bool {
        self.with_window(window, |w| w.visible).unwrap_or(false)
    }
    fn title(&self, window: WindowHandle) -> Option<String> {
        self.with_window(window, |w| w.title.clone())
            .filter(|t| !t.is_empty())
    }
    fn class_name(&self, window: WindowHandle) -> Option<String> {
        self.with_window(window, |w| w.class_name.clone())
    }
    fn owner_pid(&self, window: WindowHandle) -> Option<u32> {
        self.with_window(window, |w| w.pid)
    }
    fn placement(&self, window: WindowHandle) -> Option<Placement> {
        self.with_window(window, |w| w.placement).flatten()
    }
    fn set_placement(&self, window: WindowHandle, placement: &Placement) -> Result<()> {
        self.set_calls.lock().push((window, placement.show_state));
        let mut g = self.windows.lock();
        let Some(w) = g.get_mut(window.0 as usize) else {
            return Err(Error::Os(0));
        };
        if w.fail_set_placement {
            return Err(Error::Os(5));
        }
        w.placement = Some(*placement);
        Ok(())
    }
}
