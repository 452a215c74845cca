// src/cache/key.rs
use std::collections::HashMap;

/// Placeholder name → value mapping applied during rendering.
pub type Placeholders = HashMap<String, String>;

/// Builds a deterministic cache key from a base text plus a placeholder map.
///
/// Placeholder names are sorted byte-wise before concatenation so that
/// semantically identical maps hit the same slot regardless of insertion
/// order. The separators `|` and `=` are not escaped; names or values
/// containing them can collide with a different pair set. Known limitation,
/// kept as-is.
pub fn cache_key(base: &str, placeholders: &Placeholders) -> String {
    if placeholders.is_empty() {
        return base.to_string();
    }

    let mut names: Vec<&String> = placeholders.keys().collect();
    names.sort_unstable();

    let mut key = String::with_capacity(base.len() + placeholders.len() * 16);
    key.push_str(base);
    for name in names {
        key.push('|');
        key.push_str(name);
        key.push('=');
        key.push_str(&placeholders[name]);
    }
    key
}
