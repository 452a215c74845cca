// src/locale/error.rs

#[derive(Debug)]
pub enum LocaleError {
    InvalidLocale(String),
    Load(String),
    Parse(String),
}

impl std::fmt::Display for LocaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocale(locale) => write!(f, "Invalid locale: {}", locale),
            Self::Load(msg) => write!(f, "Load error: {}", msg),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}
