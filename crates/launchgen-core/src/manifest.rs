use serde::Serialize;

use crate::entry::LaunchEntry;

/// `launch.json` format version understood by VS Code.
pub const LAUNCH_FORMAT_VERSION: &str = "0.2.0";

/// The `launch.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchManifest {
    version: &'static str,
    configurations: Vec<LaunchEntry>,
}

impl LaunchManifest {
    /// Wrap `entries`, sorted by name.
    ///
    /// Names compare byte-wise, so `"B"` sorts before `"a"`. The sort is stable: entries with
    /// equal names keep their relative order.
    pub fn new(mut entries: Vec<LaunchEntry>) -> Self {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            version: LAUNCH_FORMAT_VERSION,
            configurations: entries,
        }
    }

    pub fn version(&self) -> &str {
        self.version
    }

    pub fn configurations(&self) -> &[LaunchEntry] {
        &self.configurations
    }

    /// Pretty-printed JSON with two-space indentation and no trailing newline.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
