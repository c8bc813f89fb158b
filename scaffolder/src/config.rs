use std::path::PathBuf;

use serde::Deserialize;

/// Manifest shipped next to the templates, describing what the
/// scaffolder must create besides the template files themselves.
#[derive(Debug, Clone, Deserialize)]
pub struct Layout {
    /// Directories ensured before any file is written, in order.
    pub directories: Vec<PathBuf>,
    /// Printed once the whole layout is on disk.
    pub message: String,
}

pub const LAYOUT_FILE: &str = "layout.yaml";

impl Layout {
    pub fn from_yaml(source: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(source)
    }
}
