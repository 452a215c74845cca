// src/cache/registry.rs
use crate::cache::lru::LruCache;
use crate::core::config::CacheCapacities;
use crate::core::error::Result;
use serde::Serialize;
use std::sync::Arc;

/// The fixed semantic buckets of cached content. The set is established at
/// construction and never restructured at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CacheCategory {
    RenderedString,
    PlainString,
    ItemLore,
    ItemLoreList,
    GuiName,
    GuiLore,
    GuiLoreList,
    EntityName,
    SmallCaps,
    MaterialName,
}

impl CacheCategory {
    pub const ALL: [CacheCategory; 10] = [
        CacheCategory::RenderedString,
        CacheCategory::PlainString,
        CacheCategory::ItemLore,
        CacheCategory::ItemLoreList,
        CacheCategory::GuiName,
        CacheCategory::GuiLore,
        CacheCategory::GuiLoreList,
        CacheCategory::EntityName,
        CacheCategory::SmallCaps,
        CacheCategory::MaterialName,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CacheCategory::RenderedString => "rendered-string",
            CacheCategory::PlainString => "plain-string",
            CacheCategory::ItemLore => "item-lore",
            CacheCategory::ItemLoreList => "item-lore-list",
            CacheCategory::GuiName => "gui-name",
            CacheCategory::GuiLore => "gui-lore",
            CacheCategory::GuiLoreList => "gui-lore-list",
            CacheCategory::EntityName => "entity-name",
            CacheCategory::SmallCaps => "small-caps",
            CacheCategory::MaterialName => "material-name",
        }
    }
}

/// Size and capacity of one category cache, for diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryStats {
    pub category: CacheCategory,
    pub size: usize,
    pub capacity: usize,
}

/// Owns one [`LruCache`] per category. Each cache carries its own lock, so
/// lookups against different categories never block each other.
pub struct CacheRegistry {
    pub rendered_string: LruCache<String, String>,
    pub plain_string: LruCache<String, String>,
    pub item_lore: LruCache<String, Arc<[String]>>,
    pub item_lore_list: LruCache<String, Vec<String>>,
    pub gui_name: LruCache<String, String>,
    pub gui_lore: LruCache<String, Arc<[String]>>,
    pub gui_lore_list: LruCache<String, Vec<String>>,
    pub entity_name: LruCache<String, String>,
    pub small_caps: LruCache<String, String>,
    pub material_name: LruCache<String, String>,
}

impl CacheRegistry {
    pub fn new(capacities: &CacheCapacities) -> Result<Self> {
        Ok(Self {
            rendered_string: LruCache::new(capacities.rendered_string)?,
            plain_string: LruCache::new(capacities.plain_string)?,
            item_lore: LruCache::new(capacities.item_lore)?,
            item_lore_list: LruCache::new(capacities.item_lore_list)?,
            gui_name: LruCache::new(capacities.gui_name)?,
            gui_lore: LruCache::new(capacities.gui_lore)?,
            gui_lore_list: LruCache::new(capacities.gui_lore_list)?,
            entity_name: LruCache::new(capacities.entity_name)?,
            small_caps: LruCache::new(capacities.small_caps)?,
            material_name: LruCache::new(capacities.material_name)?,
        })
    }

    /// Clears every owned cache. Runs synchronously as part of a reload; a
    /// lookup that raced the clear may repopulate one stale entry afterwards,
    /// which the next reload or eviction overwrites. Categories are cleared
    /// one lock at a time, never under a global lock.
    pub fn clear_all(&self) {
        self.rendered_string.clear();
        self.plain_string.clear();
        self.item_lore.clear();
        self.item_lore_list.clear();
        self.gui_name.clear();
        self.gui_lore.clear();
        self.gui_lore_list.clear();
        self.entity_name.clear();
        self.small_caps.clear();
        self.material_name.clear();
        log::debug!("All category caches cleared");
    }

    pub fn category_stats(&self) -> Vec<CategoryStats> {
        CacheCategory::ALL
            .iter()
            .map(|&category| {
                let (size, capacity) = self.dimensions(category);
                CategoryStats {
                    category,
                    size,
                    capacity,
                }
            })
            .collect()
    }

    fn dimensions(&self, category: CacheCategory) -> (usize, usize) {
        match category {
            CacheCategory::RenderedString => {
                (self.rendered_string.len(), self.rendered_string.capacity())
            }
            CacheCategory::PlainString => (self.plain_string.len(), self.plain_string.capacity()),
            CacheCategory::ItemLore => (self.item_lore.len(), self.item_lore.capacity()),
            CacheCategory::ItemLoreList => {
                (self.item_lore_list.len(), self.item_lore_list.capacity())
            }
            CacheCategory::GuiName => (self.gui_name.len(), self.gui_name.capacity()),
            CacheCategory::GuiLore => (self.gui_lore.len(), self.gui_lore.capacity()),
            CacheCategory::GuiLoreList => (self.gui_lore_list.len(), self.gui_lore_list.capacity()),
            CacheCategory::EntityName => (self.entity_name.len(), self.entity_name.capacity()),
            CacheCategory::SmallCaps => (self.small_caps.len(), self.small_caps.capacity()),
            CacheCategory::MaterialName => {
                (self.material_name.len(), self.material_name.capacity())
            }
        }
    }
}
