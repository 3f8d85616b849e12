//! Raw Win32 bindings behind [`crate::RealWinOps`].
//!
//! Per-window query failures are reported as `None`; callers skip the
//! window rather than aborting the walk.

#[cfg(windows)]
mod imp {
    use std::{ffi::OsString, mem, os::windows::ffi::OsStringExt};

    use tracing::debug;
    use windows::Win32::{
        Foundation::{BOOL, HWND, LPARAM, POINT, RECT},
        UI::WindowsAndMessaging::{
            EnumWindows, GetClassNameW, GetWindowPlacement, GetWindowTextLengthW, GetWindowTextW,
            GetWindowThreadProcessId, IsWindowVisible, SHOW_WINDOW_CMD, SetWindowPlacement,
            WINDOWPLACEMENT, WINDOWPLACEMENT_FLAGS,
        },
    };

    use crate::{Error, Placement, Point, Rect, Result, ShowState, Walk, WindowHandle};

    fn hwnd(window: WindowHandle) -> HWND {
        HWND(window.0 as *mut core::ffi::c_void)
    }

    type Visitor<'a> = &'a mut dyn FnMut(WindowHandle) -> Walk;

    pub(crate) fn walk_windows(visit: &mut dyn FnMut(WindowHandle) -> Walk) {
        unsafe extern "system" fn thunk(hwnd: HWND, lparam: LPARAM) -> BOOL {
            let visit = unsafe { &mut *(lparam.0 as *mut Visitor) };
            match visit(WindowHandle(hwnd.0 as isize)) {
                Walk::Continue => BOOL(1),
                Walk::Stop => BOOL(0),
            }
        }
        let mut visit_ref: Visitor = visit;
        // EnumWindows reports failure when the callback stops the walk early;
        // both outcomes are fine here.
        let _ = unsafe { EnumWindows(Some(thunk), LPARAM(&mut visit_ref as *mut _ as isize)) };
    }

    pub(crate) fn is_visible(window: WindowHandle) -> bool {
        unsafe { IsWindowVisible(hwnd(window)) }.as_bool()
    }

    pub(crate) fn title(window: WindowHandle) -> Option<String> {
        let h = hwnd(window);
        let len = unsafe { GetWindowTextLengthW(h) };
        if len <= 0 {
            return None;
        }
        let mut buf = vec![0u16; len as usize + 1];
        let copied = unsafe { GetWindowTextW(h, &mut buf) };
        if copied <= 0 {
            return None;
        }
        Some(
            OsString::from_wide(&buf[..copied as usize])
                .to_string_lossy()
                .into_owned(),
        )
    }

    pub(crate) fn class_name(window: WindowHandle) -> Option<String> {
        let mut buf = [0u16; 256];
        let len = unsafe { GetClassNameW(hwnd(window), &mut buf) };
        if len <= 0 {
            return None;
        }
        Some(
            OsString::from_wide(&buf[..len as usize])
                .to_string_lossy()
                .into_owned(),
        )
    }

    pub(crate) fn owner_pid(window: WindowHandle) -> Option<u32> {
        let mut pid: u32 = 0;
        let tid = unsafe { GetWindowThreadProcessId(hwnd(window), Some(&mut pid)) };
        if tid == 0 || pid == 0 {
            return None;
        }
        Some(pid)
    }

    pub(crate) fn placement(window: WindowHandle) -> Option<Placement> {
        let mut wp = WINDOWPLACEMENT {
            length: mem::size_of::<WINDOWPLACEMENT>() as u32,
            ..Default::default()
        };
        if let Err(e) = unsafe { GetWindowPlacement(hwnd(window), &mut wp) } {
            debug!("GetWindowPlacement failed: {e}");
            return None;
        }
        Some(Placement {
            show_state: ShowState::from_show_cmd(wp.showCmd.0 as u32),
            flags: wp.flags.0,
            min_anchor: Point {
                x: wp.ptMinPosition.x,
                y: wp.ptMinPosition.y,
            },
            max_anchor: Point {
                x: wp.ptMaxPosition.x,
                y: wp.ptMaxPosition.y,
            },
            normal_rect: Rect {
                left: wp.rcNormalPosition.left,
                top: wp.rcNormalPosition.top,
                right: wp.rcNormalPosition.right,
                bottom: wp.rcNormalPosition.bottom,
            },
        })
    }

    pub(crate) fn set_placement(window: WindowHandle, placement: &Placement) -> Result<()> {
        let wp = WINDOWPLACEMENT {
            length: mem::size_of::<WINDOWPLACEMENT>() as u32,
            flags: WINDOWPLACEMENT_FLAGS(placement.flags),
            showCmd: SHOW_WINDOW_CMD(placement.show_state.show_cmd() as i32),
            ptMinPosition: POINT {
                x: placement.min_anchor.x,
                y: placement.min_anchor.y,
            },
            ptMaxPosition: POINT {
                x: placement.max_anchor.x,
                y: placement.max_anchor.y,
            },
            rcNormalPosition: RECT {
                left: placement.normal_rect.left,
                top: placement.normal_rect.top,
                right: placement.normal_rect.right,
                bottom: placement.normal_rect.bottom,
            },
        };
        unsafe { SetWindowPlacement(hwnd(window), &wp) }.map_err(|e| Error::Os(e.code().0))
    }
}

#[cfg(not(windows))]
mod imp {
    use crate::{Error, Placement, Result, Walk, WindowHandle};

    pub(crate) fn walk_windows(_visit: &mut dyn FnMut(WindowHandle) -> Walk) {}

    pub(crate) fn is_visible(_window: WindowHandle) -> bool {
        false
    }

    pub(crate) fn title(_window: WindowHandle) -> Option<String> {
        None
    }

    pub(crate) fn class_name(_window: WindowHandle) -> Option<String> {
        None
    }

    pub(crate) fn owner_pid(_window: WindowHandle) -> Option<u32> {
        None
    }

    pub(crate) fn placement(_window: WindowHandle) -> Option<Placement> {
        None
    }

    pub(crate) fn set_placement(_window: WindowHandle, _placement: &Placement) -> Result<()> {
        Err(Error::Unsupported)
    }
}

pub(crate) use imp::*;
