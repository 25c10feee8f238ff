use crate::Result;
use crate::view::ListView;
use folio_types::{LayoutOptions, LayoutQuery};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A saved view preset: both persisted bags, exactly as the host stores them.
///
/// Persistence itself belongs to the host; these helpers exist for hosts that
/// want a ready-made TOML format. A missing file loads as the default preset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    #[serde(default)]
    pub layout_options: LayoutOptions,

    #[serde(default)]
    pub layout_query: LayoutQuery,
}

impl Preset {
    pub fn new(layout_options: LayoutOptions, layout_query: LayoutQuery) -> Self {
        Self {
            layout_options,
            layout_query,
        }
    }

    /// Snapshot a view's current bags.
    pub fn capture(view: &ListView) -> Self {
        Self {
            layout_options: view.options().bag().clone(),
            layout_query: view.query().bag().clone(),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let preset: Preset = toml::from_str(&content)?;
        Ok(preset)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
