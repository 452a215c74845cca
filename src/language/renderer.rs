// src/language/renderer.rs
//
// Placeholder substitution and color translation in front of a caller-owned
// rendered-string cache. The colorized and plain variants take separate
// caches: their outputs differ for the same key and must never share slots.

use crate::cache::key::{cache_key, Placeholders};
use crate::cache::lru::LruCache;
use crate::color;
use crate::language::stats::CacheStats;

/// Replaces every `{name}` occurrence for every supplied pair. Literal
/// replacement, not regex; unknown names in the text stay as written.
fn substitute(text: &str, placeholders: &Placeholders) -> String {
    let mut result = text.to_string();
    for (name, value) in placeholders {
        result = result.replace(&format!("{{{}}}", name), value);
    }
    result
}

/// Substitutes placeholders, then translates color codes. A cache hit
/// short-circuits both steps.
pub fn apply_placeholders_and_colors(
    text: &str,
    placeholders: &Placeholders,
    cache: &LruCache<String, String>,
    stats: &CacheStats,
) -> String {
    let key = cache_key(text, placeholders);
    if let Some(cached) = cache.get(&key) {
        stats.record_hit();
        return cached;
    }
    stats.record_miss();

    let result = color::translate_color_codes(&substitute(text, placeholders));
    cache.put(key, result.clone());
    result
}

/// Substitution only, no color translation. Separate cache from the
/// colorized variant.
pub fn apply_placeholders_only(
    text: &str,
    placeholders: &Placeholders,
    cache: &LruCache<String, String>,
    stats: &CacheStats,
) -> String {
    let key = cache_key(text, placeholders);
    if let Some(cached) = cache.get(&key) {
        stats.record_hit();
        return cached;
    }
    stats.record_miss();

    let result = substitute(text, placeholders);
    cache.put(key, result.clone());
    result
}

/// Expands lore lines whose placeholders carry line-breaks.
///
/// A line containing `{name}` where the value contains `\n` becomes one
/// output line per segment, each prefixed with the literal text before the
/// placeholder. Single-value placeholders are resolved first. The expansion
/// result is a sequence, so it bypasses the scalar cache; lines without
/// multi-line placeholders go through the normal cached path.
pub fn expand_multiline(
    lines: &[String],
    placeholders: &Placeholders,
    cache: &LruCache<String, String>,
    stats: &CacheStats,
) -> Vec<String> {
    let mut names: Vec<&str> = placeholders.keys().map(String::as_str).collect();
    names.sort_unstable();

    let mut result = Vec::with_capacity(lines.len());
    for line in lines {
        let has_multiline = names
            .iter()
            .any(|&name| placeholders[name].contains('\n') && line.contains(&pattern(name)));

        if !has_multiline {
            result.push(apply_placeholders_and_colors(line, placeholders, cache, stats));
            continue;
        }

        let mut processed = line.clone();
        for &name in &names {
            let value = &placeholders[name];
            if !value.contains('\n') {
                processed = processed.replace(&pattern(name), value);
            }
        }

        for &name in &names {
            let value = &placeholders[name];
            if !value.contains('\n') {
                continue;
            }
            let placeholder = pattern(name);
            let Some(position) = processed.find(&placeholder) else {
                continue;
            };

            let segments: Vec<&str> = value.split('\n').collect();
            let first = processed.replace(&placeholder, segments[0]);
            result.push(color::translate_color_codes(&first));

            let line_start = &processed[..position];
            for segment in &segments[1..] {
                result.push(color::translate_color_codes(&format!(
                    "{}{}",
                    line_start, segment
                )));
            }
        }
    }
    result
}

fn pattern(name: &str) -> String {
    format!("{{{}}}", name)
}
