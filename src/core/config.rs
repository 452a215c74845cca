// src/core/config.rs
use crate::core::constants::*;
use crate::core::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Construction-time configuration for a [`crate::language::LanguageManager`].
///
/// Capacities are fixed once the manager is built; the only runtime knob is
/// `LruCache::resize` on the individual caches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    #[serde(default = "default_locale")]
    pub default_locale: String,

    /// Optional directory with per-locale override files. Files found under
    /// `<data_dir>/<locale>/<section>.json` take precedence over the
    /// embedded defaults.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    #[serde(default)]
    pub cache: CacheCapacities,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheCapacities {
    #[serde(default = "default_string_cache")]
    pub rendered_string: usize,
    #[serde(default = "default_string_cache")]
    pub plain_string: usize,
    #[serde(default = "default_lore_cache")]
    pub item_lore: usize,
    #[serde(default = "default_lore_list_cache")]
    pub item_lore_list: usize,
    #[serde(default = "default_string_cache")]
    pub gui_name: usize,
    #[serde(default = "default_lore_cache")]
    pub gui_lore: usize,
    #[serde(default = "default_lore_list_cache")]
    pub gui_lore_list: usize,
    #[serde(default = "default_entity_name_cache")]
    pub entity_name: usize,
    #[serde(default = "default_small_caps_cache")]
    pub small_caps: usize,
    #[serde(default = "default_material_name_cache")]
    pub material_name: usize,
}

// Default functions
fn default_locale() -> String {
    DEFAULT_LOCALE.into()
}
fn default_string_cache() -> usize {
    DEFAULT_STRING_CACHE_SIZE
}
fn default_lore_cache() -> usize {
    DEFAULT_LORE_CACHE_SIZE
}
fn default_lore_list_cache() -> usize {
    DEFAULT_LORE_LIST_CACHE_SIZE
}
fn default_entity_name_cache() -> usize {
    DEFAULT_ENTITY_NAME_CACHE_SIZE
}
fn default_small_caps_cache() -> usize {
    DEFAULT_SMALL_CAPS_CACHE_SIZE
}
fn default_material_name_cache() -> usize {
    DEFAULT_MATERIAL_NAME_CACHE_SIZE
}

crate::impl_default!(CacheCapacities, {
    CacheCapacities {
        rendered_string: default_string_cache(),
        plain_string: default_string_cache(),
        item_lore: default_lore_cache(),
        item_lore_list: default_lore_list_cache(),
        gui_name: default_string_cache(),
        gui_lore: default_lore_cache(),
        gui_lore_list: default_lore_list_cache(),
        entity_name: default_entity_name_cache(),
        small_caps: default_small_caps_cache(),
        material_name: default_material_name_cache(),
    }
});

crate::impl_default!(LanguageConfig, {
    LanguageConfig {
        default_locale: default_locale(),
        data_dir: None,
        cache: CacheCapacities::default(),
    }
});

impl LanguageConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(AppError::Io)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<LanguageConfig>(content)
            .map_err(|e| AppError::Validation(format!("Failed to parse language config: {}", e)))
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }
}
