//! Test helpers for writing CLI inputs into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Selection with an edited metro override, bus untouched and seguridad
/// ignored.
pub(super) const SELECTION_WITH_OVERRIDE: &str = r#"{
  "transporte": {
    "ignored": false,
    "selectedOptions": [
      { "id": "metro", "overrideWeightPercent": 60, "touched": true },
      { "id": "bus" }
    ]
  },
  "ocio": { "ignored": false, "selectedOptions": [] },
  "seguridad": { "ignored": true, "selectedOptions": [] }
}"#;

/// Selection picking metro with no override.
pub(super) const SELECTION_METRO_ONLY: &str =
    r#"{ "transporte": { "selectedOptions": [ { "id": "metro" } ] } }"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test input");
}

/// Temporary directory addressed through UTF-8 paths.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

pub(super) fn catalog_json(option: &str, weight: f64) -> String {
    format!(r#"{{ "categories": {{ "transporte": {{ "{option}": {weight} }} }} }}"#)
}
