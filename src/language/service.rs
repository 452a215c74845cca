// src/language/service.rs
use crate::color;
use crate::core::constants::MISSING_MESSAGE_PREFIX;
use crate::core::prelude::*;
use crate::language::manager::LanguageManager;
use std::sync::{Arc, PoisonError, RwLock};

/// Receives fully rendered content. Everything arriving here is already
/// placeholder-substituted and color-translated; the sink treats it as
/// opaque text.
pub trait DeliverySink {
    fn chat(&self, message: &str);
    fn title(&self, title: &str, subtitle: &str);
    fn action_bar(&self, message: &str);
    fn sound(&self, sound: &str);
}

/// Sink that routes chat lines to the process log, colors stripped.
pub struct ConsoleSink;

impl DeliverySink for ConsoleSink {
    fn chat(&self, message: &str) {
        log::info!("{}", color::strip_color_codes(message));
    }

    fn title(&self, title: &str, subtitle: &str) {
        log::debug!("title: {} / {}", title, subtitle);
    }

    fn action_bar(&self, message: &str) {
        log::debug!("action bar: {}", message);
    }

    fn sound(&self, sound: &str) {
        log::debug!("sound: {}", sound);
    }
}

/// High-level delivery on top of [`LanguageManager`]: validates the key,
/// skips sentinel results, and forwards title/action-bar/sound components.
pub struct MessageService {
    manager: Arc<LanguageManager>,
    key_exists_cache: RwLock<HashMap<String, bool>>,
}

impl MessageService {
    pub fn new(manager: Arc<LanguageManager>) -> Self {
        Self {
            manager,
            key_exists_cache: RwLock::new(HashMap::with_capacity(128)),
        }
    }

    pub fn manager(&self) -> &LanguageManager {
        &self.manager
    }

    /// Sends the chat message plus any title/subtitle, action bar and sound
    /// configured for `key`.
    pub fn send_message(&self, sink: &dyn DeliverySink, key: &str, placeholders: &Placeholders) {
        if !self.check_key_exists(key) {
            log::warn!("Message key not found: {}", key);
            sink.chat(&format!("§cMissing message key: {}", key));
            return;
        }

        if let Some(message) = self.manager.get_message(key, placeholders) {
            if !message.starts_with(MISSING_MESSAGE_PREFIX) {
                sink.chat(&message);
            }
        }

        let title = self.manager.get_title(key, placeholders);
        let subtitle = self.manager.get_subtitle(key, placeholders);
        if title.is_some() || subtitle.is_some() {
            sink.title(
                title.as_deref().unwrap_or(""),
                subtitle.as_deref().unwrap_or(""),
            );
        }

        if let Some(action_bar) = self.manager.get_action_bar(key, placeholders) {
            sink.action_bar(&action_bar);
        }

        if let Some(sound) = self.manager.get_sound(key) {
            sink.sound(&sound);
        }
    }

    /// Console delivery: placeholders applied, all color codes stripped,
    /// routed to the process log.
    pub fn send_console_message(&self, key: &str, placeholders: &Placeholders) {
        if !self.manager.key_exists(key) {
            log::warn!("Message key not found: {}", key);
            return;
        }

        match self.manager.get_message_for_console(key, placeholders) {
            Some(message) if !message.starts_with(MISSING_MESSAGE_PREFIX) => {
                log::info!("{}", color::strip_color_codes(&message));
            }
            _ => {
                log::warn!("Failed to retrieve message for key: {}", key);
            }
        }
    }

    fn check_key_exists(&self, key: &str) -> bool {
        if let Some(&known) = self
            .key_exists_cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
        {
            return known;
        }
        let exists = self.manager.key_exists(key);
        self.key_exists_cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), exists);
        exists
    }

    /// Drop the key-existence cache, e.g. after a locale reload.
    pub fn clear_key_exists_cache(&self) {
        self.key_exists_cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
