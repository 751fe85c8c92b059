use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_NARROW_WIDTH;
use crate::error::{RecipeError, Result};
use crate::scale::ScaleBounds;
use crate::store::RecipeStore;

/// Settings shared by the CLI and the GUI.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Recipe file to load instead of the bundled collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<PathBuf>,
    #[serde(default)]
    pub scale: ScaleBounds,
    #[serde(default)]
    pub sidebar: SidebarConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Whether the sidebar starts collapsed. Only narrow viewports draw
    /// the collapsed state, so the default keeps a narrow launch closed.
    pub start_collapsed: bool,
    /// Viewport width (points) below which the sidebar becomes an overlay.
    pub narrow_width: f32,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            start_collapsed: true,
            narrow_width: DEFAULT_NARROW_WIDTH,
        }
    }
}

impl BrowserConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        self.scale.validate()?;
        if !self.sidebar.narrow_width.is_finite() || self.sidebar.narrow_width < 0.0 {
            return Err(RecipeError::InvalidConfig(format!(
                "sidebar narrow_width must be a non-negative number (got {})",
                self.sidebar.narrow_width
            )));
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load the configured recipe file, or the bundled collection.
    pub fn load_store(&self) -> Result<RecipeStore> {
        match &self.data {
            Some(path) => RecipeStore::load(path),
            None => RecipeStore::bundled(),
        }
    }
}
