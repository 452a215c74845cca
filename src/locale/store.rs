// src/locale/store.rs
use crate::core::error::{AppError, Result};
use crate::locale::data::{LocaleData, LocaleSection, SectionData};
use crate::locale::error::LocaleError;
use rust_embed::RustEmbed;
use std::collections::HashSet;
use std::path::PathBuf;

#[derive(RustEmbed)]
#[folder = "src/locale/assets/"]
struct Assets;

/// Supplies raw locale data: embedded defaults, with on-disk override files
/// taking precedence when a data directory is configured. Read-only — the
/// store never writes files.
pub struct LocaleStore {
    data_dir: Option<PathBuf>,
    active_sections: HashSet<LocaleSection>,
}

impl LocaleStore {
    pub fn new(data_dir: Option<PathBuf>, sections: &[LocaleSection]) -> Self {
        Self {
            data_dir,
            active_sections: sections.iter().copied().collect(),
        }
    }

    pub fn is_active(&self, section: LocaleSection) -> bool {
        self.active_sections.contains(&section)
    }

    /// Locales known to the store: embedded asset directories plus any
    /// subdirectory of the configured data directory.
    pub fn available_locales(&self) -> Vec<String> {
        let mut locales: HashSet<String> = Assets::iter()
            .filter_map(|path| {
                path.as_ref()
                    .split_once('/')
                    .map(|(locale, _)| locale.to_string())
            })
            .collect();

        if let Some(dir) = &self.data_dir {
            if let Ok(entries) = std::fs::read_dir(dir) {
                for entry in entries.flatten() {
                    if entry.path().is_dir() {
                        if let Some(name) = entry.file_name().to_str() {
                            locales.insert(name.to_string());
                        }
                    }
                }
            }
        }

        let mut sorted: Vec<String> = locales.into_iter().collect();
        sorted.sort();
        sorted
    }

    /// Loads every active section for `locale`. Inactive sections come back
    /// empty. Unknown locales are rejected.
    pub fn load_locale(&self, locale: &str) -> Result<LocaleData> {
        if !self
            .available_locales()
            .iter()
            .any(|l| l.eq_ignore_ascii_case(locale))
        {
            return Err(AppError::Locale(LocaleError::InvalidLocale(locale.into())));
        }

        let mut data = LocaleData::empty();
        for section in LocaleSection::ALL {
            if self.is_active(section) {
                data = data.with_section(section, self.load_section(locale, section)?);
            }
        }
        Ok(data)
    }

    fn load_section(&self, locale: &str, section: LocaleSection) -> Result<SectionData> {
        if let Some(content) = self.read_override(locale, section) {
            match SectionData::from_json_str(&content) {
                Ok(data) => return Ok(data),
                Err(e) => {
                    // Broken override: fall back to the embedded default
                    log::warn!(
                        "Failed to parse {} override for locale {}: {}",
                        section.file_name(),
                        locale,
                        e
                    );
                }
            }
        }

        let embedded_path = format!("{}/{}", locale, section.file_name());
        let Some(file) = Assets::get(&embedded_path) else {
            log::warn!("No {} found for locale {}", section.file_name(), locale);
            return Ok(SectionData::empty());
        };

        let content = std::str::from_utf8(file.data.as_ref())
            .map_err(|e| AppError::Locale(LocaleError::Load(e.to_string())))?;
        SectionData::from_json_str(content)
            .map_err(|e| AppError::Locale(LocaleError::Parse(e.to_string())))
    }

    fn read_override(&self, locale: &str, section: LocaleSection) -> Option<String> {
        let dir = self.data_dir.as_ref()?;
        let path = dir.join(locale).join(section.file_name());
        if !path.exists() {
            return None;
        }
        match std::fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) => {
                log::warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }
}
