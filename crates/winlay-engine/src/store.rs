//! JSON persistence for snapshot sequences.
//!
//! The on-disk shape is a single array of objects with `Title`,
//! `ClassName`, `ProcessId`, and a `WinPlacement` mirroring the Win32
//! `WINDOWPLACEMENT` layout (`length`, `flags`, `showCmd`, point and rect
//! members). Loading is case-insensitive on field names and treats a
//! missing file as an empty sequence; a file that exists but does not
//! parse is a fatal error, since the file is self-produced.

use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use win_winops::{Placement, Point, Rect, ShowState};

use crate::{Error, Result, snapshot::WindowSnapshot};

/// Size of the Win32 `WINDOWPLACEMENT` structure, written into the
/// `length` member for compatibility with the native format.
const WINDOWPLACEMENT_LEN: u32 = 44;

#[derive(Debug, Serialize, Deserialize)]
struct WireSnapshot {
    #[serde(rename(serialize = "Title", deserialize = "title"))]
    title: String,
    #[serde(
        rename(serialize = "ClassName", deserialize = "classname"),
        skip_serializing_if = "Option::is_none",
        default
    )]
    class_name: Option<String>,
    #[serde(
        rename(serialize = "ProcessId", deserialize = "processid"),
        skip_serializing_if = "Option::is_none",
        default
    )]
    process_id: Option<u32>,
    #[serde(rename(serialize = "WinPlacement", deserialize = "winplacement"))]
    placement: WirePlacement,
}

#[derive(Debug, Serialize, Deserialize)]
struct WirePlacement {
    #[serde(default)]
    length: u32,
    #[serde(default)]
    flags: u32,
    #[serde(rename(serialize = "showCmd", deserialize = "showcmd"))]
    show_cmd: u32,
    #[serde(rename(serialize = "ptMinPosition", deserialize = "ptminposition"), default)]
    pt_min_position: WirePoint,
    #[serde(rename(serialize = "ptMaxPosition", deserialize = "ptmaxposition"), default)]
    pt_max_position: WirePoint,
    #[serde(rename(serialize = "rcNormalPosition", deserialize = "rcnormalposition"))]
    rc_normal_position: WireRect,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct WirePoint {
    #[serde(rename(serialize = "X", deserialize = "x"))]
    x: i32,
    #[serde(rename(serialize = "Y", deserialize = "y"))]
    y: i32,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct WireRect {
    #[serde(rename(serialize = "Left", deserialize = "left"))]
    left: i32,
    #[serde(rename(serialize = "Top", deserialize = "top"))]
    top: i32,
    #[serde(rename(serialize = "Right", deserialize = "right"))]
    right: i32,
    #[serde(rename(serialize = "Bottom", deserialize = "bottom"))]
    bottom: i32,
}

impl From<&WindowSnapshot> for WireSnapshot {
    fn from(s: &WindowSnapshot) -> Self {
        let p = &s.placement;
        Self {
            title: s.title.clone(),
            class_name: s.class_name.clone(),
            process_id: s.process_id,
            placement: WirePlacement {
                length: WINDOWPLACEMENT_LEN,
                flags: p.flags,
                show_cmd: p.show_state.show_cmd(),
                pt_min_position: WirePoint {
                    x: p.min_anchor.x,
                    y: p.min_anchor.y,
                },
                pt_max_position: WirePoint {
                    x: p.max_anchor.x,
                    y: p.max_anchor.y,
                },
                rc_normal_position: WireRect {
                    left: p.normal_rect.left,
                    top: p.normal_rect.top,
                    right: p.normal_rect.right,
                    bottom: p.normal_rect.bottom,
                },
            },
        }
    }
}

impl From<WireSnapshot> for WindowSnapshot {
    fn from(w: WireSnapshot) -> Self {
        let p = w.placement;
        Self {
            title: w.title,
            class_name: w.class_name,
            process_id: w.process_id,
            placement: Placement {
                show_state: ShowState::from_show_cmd(p.show_cmd),
                flags: p.flags,
                min_anchor: Point {
                    x: p.pt_min_position.x,
                    y: p.pt_min_position.y,
                },
                max_anchor: Point {
                    x: p.pt_max_position.x,
                    y: p.pt_max_position.y,
                },
                normal_rect: Rect {
                    left: p.rc_normal_position.left,
                    top: p.rc_normal_position.top,
                    right: p.rc_normal_position.right,
                    bottom: p.rc_normal_position.bottom,
                },
            },
        }
    }
}

/// Write `snapshots` to `path` as pretty-printed JSON.
pub fn save(path: &Path, snapshots: &[WindowSnapshot]) -> Result<()> {
    let wire: Vec<WireSnapshot> = snapshots.iter().map(WireSnapshot::from).collect();
    let json = serde_json::to_string_pretty(&wire).map_err(Error::Encode)?;
    fs::write(path, json).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the snapshot sequence from `path`.
///
/// A missing file yields an empty sequence. Field-name lookup is
/// case-insensitive: object keys are normalized before typed
/// deserialization.
pub fn load(path: &Path) -> Result<Vec<WindowSnapshot>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(Error::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    let value: Value = serde_json::from_str(&text).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let wire: Vec<WireSnapshot> =
        serde_json::from_value(lowercase_keys(value)).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(wire.into_iter().map(WindowSnapshot::from).collect())
}

fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k.to_ascii_lowercase(), lowercase_keys(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(lowercase_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<WindowSnapshot> {
        vec![
            WindowSnapshot {
                title: "Notepad".to_string(),
                class_name: Some("Notepad".to_string()),
                process_id: Some(4242),
                placement: Placement {
                    show_state: ShowState::Maximized,
                    flags: 2,
                    min_anchor: Point { x: -1, y: -1 },
                    max_anchor: Point { x: -1, y: -1 },
                    normal_rect: Rect::new(10, 10, 500, 500),
                },
            },
            WindowSnapshot {
                title: "Notepad".to_string(),
                class_name: Some("Notepad".to_string()),
                process_id: Some(4343),
                placement: Placement::new(ShowState::Normal, Rect::new(100, 100, 900, 700)),
            },
        ]
    }

    #[test]
    fn round_trip_preserves_content_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("InfoWindows.json");
        let snaps = sample();
        save(&path, &snaps).unwrap();
        assert_eq!(load(&path).unwrap(), snaps);
    }

    #[test]
    fn missing_file_yields_empty_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load(&dir.path().join("does-not-exist.json")).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn unparseable_file_is_a_fatal_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("InfoWindows.json");
        fs::write(&path, "{ not json ]").unwrap();
        assert!(matches!(load(&path), Err(Error::Parse { .. })));
    }

    #[test]
    fn serialized_output_uses_native_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("InfoWindows.json");
        save(&path, &sample()).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        for name in [
            "\"Title\"",
            "\"ClassName\"",
            "\"ProcessId\"",
            "\"WinPlacement\"",
            "\"showCmd\"",
            "\"ptMinPosition\"",
            "\"ptMaxPosition\"",
            "\"rcNormalPosition\"",
            "\"Left\"",
            "\"X\"",
        ] {
            assert!(text.contains(name), "missing {name} in {text}");
        }
    }

    #[test]
    fn load_is_case_insensitive_on_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("InfoWindows.json");
        fs::write(
            &path,
            r#"[{
                "TITLE": "Shell",
                "classNAME": "ConsoleWindowClass",
                "processid": 7,
                "winPlacement": {
                    "LENGTH": 44,
                    "Flags": 0,
                    "SHOWCMD": 3,
                    "PtMinPosition": { "x": -1, "Y": -1 },
                    "ptmaxposition": { "X": -1, "y": -1 },
                    "RcNormalPosition": { "LEFT": 1, "top": 2, "Right": 3, "BOTTOM": 4 }
                }
            }]"#,
        )
        .unwrap();
        let loaded = load(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "Shell");
        assert_eq!(loaded[0].class_name.as_deref(), Some("ConsoleWindowClass"));
        assert_eq!(loaded[0].process_id, Some(7));
        assert_eq!(loaded[0].placement.show_state, ShowState::Maximized);
        assert_eq!(loaded[0].placement.normal_rect, Rect::new(1, 2, 3, 4));
    }

    #[test]
    fn optional_identity_fields_may_be_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("InfoWindows.json");
        fs::write(
            &path,
            r#"[{
                "Title": "Plain",
                "WinPlacement": {
                    "showCmd": 1,
                    "rcNormalPosition": { "Left": 0, "Top": 0, "Right": 10, "Bottom": 10 }
                }
            }]"#,
        )
        .unwrap();
        let loaded = load(&path).unwrap();
        assert_eq!(loaded[0].class_name, None);
        assert_eq!(loaded[0].process_id, None);
        assert_eq!(loaded[0].placement.show_state, ShowState::Normal);
    }
}
