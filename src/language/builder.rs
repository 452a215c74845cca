// src/language/builder.rs
use crate::core::config::CacheCapacities;
use crate::core::prelude::*;
use crate::language::manager::LanguageManager;
use std::path::PathBuf;

/// Step-wise construction of a [`LanguageManager`].
///
/// ```
/// use locale_core::language::LanguageManagerBuilder;
/// use locale_core::locale::LocaleSection;
///
/// let manager = LanguageManagerBuilder::new()
///     .locale("en_US")
///     .sections(&[LocaleSection::Messages, LocaleSection::Gui])
///     .build()
///     .expect("manager");
/// assert_eq!(manager.locale(), "en_US");
/// ```
pub struct LanguageManagerBuilder {
    config: LanguageConfig,
    sections: Vec<LocaleSection>,
}

impl LanguageManagerBuilder {
    pub fn new() -> Self {
        Self {
            config: LanguageConfig::default(),
            sections: LocaleSection::ALL.to_vec(),
        }
    }

    pub fn config(mut self, config: LanguageConfig) -> Self {
        self.config = config;
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.config.default_locale = locale.into();
        self
    }

    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.data_dir = Some(dir.into());
        self
    }

    pub fn sections(mut self, sections: &[LocaleSection]) -> Self {
        self.sections = sections.to_vec();
        self
    }

    pub fn capacities(mut self, capacities: CacheCapacities) -> Self {
        self.config.cache = capacities;
        self
    }

    pub fn build(self) -> Result<LanguageManager> {
        LanguageManager::with_sections(self.config, &self.sections)
    }
}

impl Default for LanguageManagerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::key::Placeholders;

    #[test]
    fn builder_limits_active_sections() {
        let manager = LanguageManagerBuilder::new()
            .sections(&[LocaleSection::Messages])
            .build()
            .expect("manager");

        // GUI section inactive: title resolution declines entirely
        assert_eq!(
            manager.get_gui_title("main_menu.title", &Placeholders::new()),
            None
        );
        assert!(manager.key_exists("welcome"));
    }

    #[test]
    fn builder_applies_capacities() {
        let mut capacities = CacheCapacities::default();
        capacities.rendered_string = 8;
        let manager = LanguageManagerBuilder::new()
            .capacities(capacities)
            .build()
            .expect("manager");
        assert_eq!(manager.caches().rendered_string.capacity(), 8);
    }

    #[test]
    fn builder_rejects_unknown_locale() {
        let res = LanguageManagerBuilder::new().locale("zz_ZZ").build();
        assert!(res.is_err());
    }
}
