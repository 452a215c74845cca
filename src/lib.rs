#[macro_export]
macro_rules! impl_default {
    ($type:ty, $body:expr) => {
        impl Default for $type {
            fn default() -> Self {
                $body
            }
        }
    };
}

/// Builds a placeholder map inline:
/// `placeholders! { "player" => "Steve", "amount" => 3 }`
#[macro_export]
macro_rules! placeholders {
    () => {
        $crate::cache::key::Placeholders::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::cache::key::Placeholders::new();
        $(
            map.insert($name.to_string(), $value.to_string());
        )+
        map
    }};
}

// Module definitions
pub mod cache;
pub mod color;
pub mod core;
pub mod language;
pub mod locale;

// Essential re-exports
pub use cache::{cache_key, CacheCategory, CacheRegistry, LruCache, Placeholders};
pub use core::config::{CacheCapacities, LanguageConfig};
pub use core::error::{AppError, Result};
pub use language::{
    ConsoleSink, DeliverySink, LanguageManager, LanguageManagerBuilder, MessageService, Statistics,
};
pub use locale::{LocaleData, LocaleError, LocaleSection, LocaleStore, SectionData};

/// Manager with embedded defaults, every section active.
pub fn create_default_manager() -> Result<LanguageManager> {
    LanguageManager::new(LanguageConfig::default())
}

/// Manager plus delivery service in one call.
pub fn create_message_service(config: LanguageConfig) -> Result<MessageService> {
    let manager = LanguageManager::new(config)?;
    Ok(MessageService::new(std::sync::Arc::new(manager)))
}

pub fn load_config(path: &std::path::Path) -> Result<LanguageConfig> {
    LanguageConfig::load(path)
}
