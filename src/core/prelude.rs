// src/core/prelude.rs

// Core essentials - needed everywhere
pub use crate::core::config::LanguageConfig;
pub use crate::core::error::{AppError, Result};

// Standard library essentials
pub use std::collections::HashMap;

// Locale essentials
pub use crate::locale::data::LocaleSection;
pub use crate::locale::error::LocaleError;

// Placeholder map used by every rendering entry point
pub use crate::cache::key::Placeholders;
