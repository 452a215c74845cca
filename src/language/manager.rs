// src/language/manager.rs
use crate::cache::key::cache_key;
use crate::cache::registry::CacheRegistry;
use crate::core::constants::{DEFAULT_MESSAGE_PREFIX, MISSING_MESSAGE_PREFIX};
use crate::core::prelude::*;
use crate::language::renderer;
use crate::language::stats::{CacheStats, Statistics};
use crate::locale::data::LocaleData;
use crate::locale::store::LocaleStore;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

struct LocaleState {
    locale: String,
    data: LocaleData,
}

/// Resolution facade: locale lookups, rendering and the per-category caches
/// behind one object.
///
/// Many threads may resolve concurrently; `reload` and `set_locale` may run
/// alongside them. A resolve racing a reload can repopulate one stale cache
/// entry after the clear — a bounded window that the next reload or eviction
/// closes. Lookups are never serialized behind a global lock for it.
pub struct LanguageManager {
    store: LocaleStore,
    state: RwLock<LocaleState>,
    caches: CacheRegistry,
    stats: CacheStats,
}

impl LanguageManager {
    /// Builds a manager with every locale section active.
    pub fn new(config: LanguageConfig) -> Result<Self> {
        Self::with_sections(config, &LocaleSection::ALL)
    }

    /// Builds a manager loading only the given sections; the others stay
    /// empty and their operations degrade per category.
    pub fn with_sections(config: LanguageConfig, sections: &[LocaleSection]) -> Result<Self> {
        let store = LocaleStore::new(config.data_dir.clone(), sections);
        let data = store.load_locale(&config.default_locale)?;
        Ok(Self {
            store,
            state: RwLock::new(LocaleState {
                locale: config.default_locale,
                data,
            }),
            caches: CacheRegistry::new(&config.cache)?,
            stats: CacheStats::new(),
        })
    }

    fn state(&self) -> RwLockReadGuard<'_, LocaleState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn locale(&self) -> String {
        self.state().locale.clone()
    }

    pub fn available_locales(&self) -> Vec<String> {
        self.store.available_locales()
    }

    pub fn caches(&self) -> &CacheRegistry {
        &self.caches
    }

    fn is_active(&self, section: LocaleSection) -> bool {
        self.store.is_active(section)
    }

    //---------------------------------------------------
    //                 Messages
    //---------------------------------------------------

    /// Prefixed chat message for `key`. `None` when the key is disabled;
    /// the missing-message sentinel when the key is absent.
    pub fn get_message(&self, key: &str, placeholders: &Placeholders) -> Option<String> {
        if !self.is_message_enabled(key) {
            return None;
        }
        let Some(message) = self.message_string(&format!("{}.message", key)) else {
            return Some(format!("{}{}", MISSING_MESSAGE_PREFIX, key));
        };
        let prefixed = format!("{}{}", self.get_prefix(), message);
        Some(self.apply_placeholders_and_colors(&prefixed, placeholders))
    }

    pub fn get_message_without_prefix(
        &self,
        key: &str,
        placeholders: &Placeholders,
    ) -> Option<String> {
        if !self.is_message_enabled(key) {
            return None;
        }
        let Some(message) = self.message_string(&format!("{}.message", key)) else {
            return Some(format!("{}{}", MISSING_MESSAGE_PREFIX, key));
        };
        Some(self.apply_placeholders_and_colors(&message, placeholders))
    }

    /// Console variant: placeholders only, no color translation.
    pub fn get_message_for_console(
        &self,
        key: &str,
        placeholders: &Placeholders,
    ) -> Option<String> {
        if !self.is_message_enabled(key) {
            return None;
        }
        let Some(message) = self.message_string(&format!("{}.message", key)) else {
            return Some(format!("{}{}", MISSING_MESSAGE_PREFIX, key));
        };
        Some(self.apply_placeholders_only(&message, placeholders))
    }

    pub fn get_title(&self, key: &str, placeholders: &Placeholders) -> Option<String> {
        self.raw_message(&format!("{}.title", key), placeholders)
    }

    pub fn get_subtitle(&self, key: &str, placeholders: &Placeholders) -> Option<String> {
        self.raw_message(&format!("{}.subtitle", key), placeholders)
    }

    pub fn get_action_bar(&self, key: &str, placeholders: &Placeholders) -> Option<String> {
        self.raw_message(&format!("{}.action_bar", key), placeholders)
    }

    pub fn get_sound(&self, key: &str) -> Option<String> {
        if !self.is_message_enabled(key) {
            return None;
        }
        self.message_string(&format!("{}.sound", key))
    }

    pub fn key_exists(&self, key: &str) -> bool {
        self.state().data.messages().contains(key)
    }

    pub fn is_message_enabled(&self, key: &str) -> bool {
        self.state()
            .data
            .messages()
            .get_bool(&format!("{}.enabled", key), true)
    }

    fn get_prefix(&self) -> String {
        self.message_string("prefix")
            .unwrap_or_else(|| DEFAULT_MESSAGE_PREFIX.to_string())
    }

    fn message_string(&self, path: &str) -> Option<String> {
        self.state().data.messages().get_string(path)
    }

    fn raw_message(&self, path: &str, placeholders: &Placeholders) -> Option<String> {
        if !self.is_message_enabled(path.rsplit_once('.').map(|(k, _)| k).unwrap_or(path)) {
            return None;
        }
        let message = self.message_string(path)?;
        Some(self.apply_placeholders_and_colors(&message, placeholders))
    }

    //---------------------------------------------------
    //                 GUI
    //---------------------------------------------------

    pub fn get_gui_title(&self, key: &str, placeholders: &Placeholders) -> Option<String> {
        if !self.is_active(LocaleSection::Gui) {
            return None;
        }
        let Some(title) = self.state().data.gui().get_string(key) else {
            return Some(format!("Missing GUI title: {}", key));
        };
        Some(self.apply_placeholders_and_colors(&title, placeholders))
    }

    pub fn get_gui_item_name(&self, key: &str, placeholders: &Placeholders) -> Option<String> {
        if !self.is_active(LocaleSection::Gui) {
            return None;
        }

        let slot = format!("{}|{}", key, cache_key("", placeholders));
        if let Some(cached) = self.caches.gui_name.get(&slot) {
            self.stats.record_hit();
            return Some(cached);
        }
        self.stats.record_miss();

        let Some(name) = self.state().data.gui().get_string(key) else {
            return Some(format!("Missing item name: {}", key));
        };
        let result = self.apply_placeholders_and_colors(&name, placeholders);
        self.caches.gui_name.put(slot, result.clone());
        Some(result)
    }

    pub fn get_gui_item_lore(&self, key: &str, placeholders: &Placeholders) -> Arc<[String]> {
        if !self.is_active(LocaleSection::Gui) {
            return Arc::from(Vec::new());
        }

        let slot = format!("{}|{}", key, cache_key("", placeholders));
        if let Some(cached) = self.caches.gui_lore.get(&slot) {
            self.stats.record_hit();
            return cached;
        }
        self.stats.record_miss();

        let lines = self.state().data.gui().get_string_list(key);
        let result: Arc<[String]> = Arc::from(self.render_lines(&lines, placeholders));
        self.caches.gui_lore.put(slot, Arc::clone(&result));
        result
    }

    pub fn get_gui_item_lore_as_list(
        &self,
        key: &str,
        placeholders: &Placeholders,
    ) -> Vec<String> {
        if !self.is_active(LocaleSection::Gui) {
            return Vec::new();
        }

        let slot = format!("{}|{}", key, cache_key("", placeholders));
        if let Some(cached) = self.caches.gui_lore_list.get(&slot) {
            self.stats.record_hit();
            return cached;
        }
        self.stats.record_miss();

        let lines = self.state().data.gui().get_string_list(key);
        let result = self.render_lines(&lines, placeholders);
        self.caches.gui_lore_list.put(slot, result.clone());
        result
    }

    /// Lore with multi-line placeholder expansion; the output is a sequence,
    /// so this path is uncached.
    pub fn get_gui_item_lore_multiline(
        &self,
        key: &str,
        placeholders: &Placeholders,
    ) -> Vec<String> {
        if !self.is_active(LocaleSection::Gui) {
            return Vec::new();
        }
        let lines = self.state().data.gui().get_string_list(key);
        renderer::expand_multiline(
            &lines,
            placeholders,
            &self.caches.rendered_string,
            &self.stats,
        )
    }

    //---------------------------------------------------
    //                 Items
    //---------------------------------------------------

    /// Item name for `key`; falls back to the key itself when the items
    /// section is inactive or the key is unknown.
    pub fn get_item_name(&self, key: &str, placeholders: &Placeholders) -> String {
        if !self.is_active(LocaleSection::Items) {
            return key.to_string();
        }
        let Some(name) = self.state().data.items().get_string(key) else {
            return key.to_string();
        };
        self.apply_placeholders_and_colors(&name, placeholders)
    }

    pub fn get_item_lore(&self, key: &str, placeholders: &Placeholders) -> Arc<[String]> {
        if !self.is_active(LocaleSection::Items) {
            return Arc::from(Vec::new());
        }

        let slot = format!("{}|{}", key, cache_key("", placeholders));
        if let Some(cached) = self.caches.item_lore.get(&slot) {
            self.stats.record_hit();
            return cached;
        }
        self.stats.record_miss();

        let lines = self.state().data.items().get_string_list(key);
        let result: Arc<[String]> = Arc::from(self.render_lines(&lines, placeholders));
        self.caches.item_lore.put(slot, Arc::clone(&result));
        result
    }

    pub fn get_item_lore_as_list(&self, key: &str, placeholders: &Placeholders) -> Vec<String> {
        if !self.is_active(LocaleSection::Items) {
            return Vec::new();
        }

        let slot = format!("{}|{}", key, cache_key("", placeholders));
        if let Some(cached) = self.caches.item_lore_list.get(&slot) {
            self.stats.record_hit();
            return cached;
        }
        self.stats.record_miss();

        let lines = self.state().data.items().get_string_list(key);
        let result = self.render_lines(&lines, placeholders);
        self.caches.item_lore_list.put(slot, result.clone());
        result
    }

    pub fn get_item_lore_multiline(&self, key: &str, placeholders: &Placeholders) -> Vec<String> {
        if !self.is_active(LocaleSection::Items) {
            return Vec::new();
        }
        let lines = self.state().data.items().get_string_list(key);
        renderer::expand_multiline(
            &lines,
            placeholders,
            &self.caches.rendered_string,
            &self.stats,
        )
    }

    /// Display name for a material identifier such as `DIAMOND_SWORD`.
    /// Translated via `item.<id>.name` when available, otherwise derived
    /// from the identifier.
    pub fn get_material_name(&self, material_id: &str) -> String {
        if material_id.is_empty() {
            return "Unknown Item".to_string();
        }

        let slot = format!("material|{}", material_id);
        if let Some(cached) = self.caches.material_name.get(&slot) {
            self.stats.record_hit();
            return cached;
        }
        self.stats.record_miss();

        let translated = if self.is_active(LocaleSection::Items) {
            self.state()
                .data
                .items()
                .get_string(&format!("item.{}.name", material_id))
        } else {
            None
        };

        let result = match translated {
            Some(name) => self.apply_placeholders_and_colors(&name, &Placeholders::new()),
            None => format_enum_name(material_id),
        };
        self.caches.material_name.put(slot, result.clone());
        result
    }

    pub fn get_material_lore(&self, material_id: &str) -> Arc<[String]> {
        if material_id.is_empty() {
            return Arc::from(Vec::new());
        }
        self.get_item_lore(&format!("item.{}.lore", material_id), &Placeholders::new())
    }

    //---------------------------------------------------
    //                 Formatting
    //---------------------------------------------------

    /// Display name for an entity identifier such as `CAVE_SPIDER`.
    pub fn get_entity_name(&self, entity_id: &str) -> String {
        if entity_id.is_empty() || entity_id == "UNKNOWN" {
            return "Unknown".to_string();
        }

        let slot = format!("mob_name|{}", entity_id);
        if let Some(cached) = self.caches.entity_name.get(&slot) {
            self.stats.record_hit();
            return cached;
        }
        self.stats.record_miss();

        if self.is_active(LocaleSection::Formatting) {
            let translated = self
                .state()
                .data
                .formatting()
                .get_string(&format!("mob_names.{}", entity_id));
            if let Some(name) = translated {
                let result = self.apply_placeholders_and_colors(&name, &Placeholders::new());
                self.caches.entity_name.put(slot, result.clone());
                return result;
            }
        }

        let result = format_enum_name(entity_id);
        self.caches.entity_name.put(slot, result.clone());
        result
    }

    /// Abbreviates large numbers (1K / 1M / 1B / 1T) with per-locale
    /// patterns; `{s}` is the value slot.
    pub fn format_number(&self, number: f64) -> String {
        let (path, fallback, divisor) = if number >= 1_000_000_000_000.0 {
            ("format_number.trillion", "{s}T", 1_000_000_000_000.0)
        } else if number >= 1_000_000_000.0 {
            ("format_number.billion", "{s}B", 1_000_000_000.0)
        } else if number >= 1_000_000.0 {
            ("format_number.million", "{s}M", 1_000_000.0)
        } else if number >= 1_000.0 {
            ("format_number.thousand", "{s}K", 1_000.0)
        } else {
            ("format_number.default", "{s}", 1.0)
        };

        let value = (number / divisor * 10.0).round() / 10.0;
        let format = if self.is_active(LocaleSection::Formatting) {
            self.state()
                .data
                .formatting()
                .get_string(path)
                .unwrap_or_else(|| fallback.to_string())
        } else {
            fallback.to_string()
        };
        format.replace("{s}", &format_decimal(value))
    }

    //---------------------------------------------------
    //                 Decorative text
    //---------------------------------------------------

    /// Unicode small-caps rendition of `text` ("Hello" → "ʜᴇʟʟᴏ"), cached.
    pub fn small_caps(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let slot = format!("smallcaps|{}", text);
        if let Some(cached) = self.caches.small_caps.get(&slot) {
            self.stats.record_hit();
            return cached;
        }
        self.stats.record_miss();

        let result: String = text
            .chars()
            .map(|c| {
                if c.is_alphabetic() {
                    small_caps_char(c.to_ascii_lowercase())
                } else {
                    c
                }
            })
            .collect();
        self.caches.small_caps.put(slot, result.clone());
        result
    }

    //---------------------------------------------------
    //                 Rendering
    //---------------------------------------------------

    pub fn apply_placeholders_and_colors(
        &self,
        text: &str,
        placeholders: &Placeholders,
    ) -> String {
        renderer::apply_placeholders_and_colors(
            text,
            placeholders,
            &self.caches.rendered_string,
            &self.stats,
        )
    }

    pub fn apply_placeholders_only(&self, text: &str, placeholders: &Placeholders) -> String {
        renderer::apply_placeholders_only(
            text,
            placeholders,
            &self.caches.plain_string,
            &self.stats,
        )
    }

    fn render_lines(&self, lines: &[String], placeholders: &Placeholders) -> Vec<String> {
        lines
            .iter()
            .map(|line| self.apply_placeholders_and_colors(line, placeholders))
            .collect()
    }

    //---------------------------------------------------
    //                 Lifecycle & diagnostics
    //---------------------------------------------------

    /// Clears every cache, then re-reads the current locale from the store.
    /// The next lookup reflects any on-disk changes.
    pub fn reload(&self) -> Result<()> {
        self.caches.clear_all();
        let locale = self.locale();
        let data = self.store.load_locale(&locale)?;
        self.state.write().unwrap_or_else(PoisonError::into_inner).data = data;
        log::info!("Reloaded locale files for {}", locale);
        Ok(())
    }

    /// Switches to another locale and drops all cached renderings.
    pub fn set_locale(&self, locale: &str) -> Result<()> {
        let data = self.store.load_locale(locale)?;
        self.caches.clear_all();
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.locale = locale.to_string();
        state.data = data;
        log::info!("Switched locale to {}", locale);
        Ok(())
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::new(
            self.caches.category_stats(),
            self.stats.hits(),
            self.stats.misses(),
        )
    }
}

/// "CAVE_SPIDER" → "Cave Spider"
pub fn format_enum_name(enum_name: &str) -> String {
    enum_name
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => format!(
                    "{}{}",
                    first.to_uppercase(),
                    chars.as_str().to_lowercase()
                ),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_decimal(value: f64) -> String {
    if value == value.floor() {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn small_caps_char(c: char) -> char {
    match c {
        'a' => 'ᴀ',
        'b' => 'ʙ',
        'c' => 'ᴄ',
        'd' => 'ᴅ',
        'e' => 'ᴇ',
        'f' => 'ꜰ',
        'g' => 'ɢ',
        'h' => 'ʜ',
        'i' => 'ɪ',
        'j' => 'ᴊ',
        'k' => 'ᴋ',
        'l' => 'ʟ',
        'm' => 'ᴍ',
        'n' => 'ɴ',
        'o' => 'ᴏ',
        'p' => 'ᴘ',
        'q' => 'ǫ',
        'r' => 'ʀ',
        's' => 'ꜱ',
        't' => 'ᴛ',
        'u' => 'ᴜ',
        'v' => 'ᴠ',
        'w' => 'ᴡ',
        'x' => 'x',
        'y' => 'ʏ',
        'z' => 'ᴢ',
        other => other,
    }
}
