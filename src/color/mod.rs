// src/color/mod.rs
//
// Color-code translation between the ampersand notation used in locale files
// and the section-sign notation understood by the presentation engine.
// Hex codes are written `&#RRGGBB` and expand to `§x§r§r§g§g§b§b`;
// legacy codes are `&<code>` with code in [0-9a-fk-orx].

use lazy_static::lazy_static;
use once_cell::sync::Lazy;
use regex::Regex;

pub const SECTION: char = '\u{00A7}';

static HEX_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&#([A-Fa-f0-9]{6})").expect("valid hex pattern"));

lazy_static! {
    static ref SECTION_CODES: Regex =
        Regex::new(r"§[0-9a-fA-FxX]|§[klmnorKLMNOR]").expect("valid section pattern");
    static ref HEX_CODES: Regex = Regex::new(r"&#[0-9a-fA-F]{6}").expect("valid hex strip pattern");
    static ref AMPERSAND_CODES: Regex =
        Regex::new(r"&[0-9a-fA-FxXklmnorKLMNOR]").expect("valid ampersand pattern");
}

const LEGACY_CODE_CHARS: &str = "0123456789AaBbCcDdEeFfKkLlMmNnOoRrXx";

/// Translates hex color codes, then legacy ampersand codes.
pub fn translate_color_codes(message: &str) -> String {
    translate_legacy_only(&translate_hex_only(message))
}

/// Converts `&#RRGGBB` sequences to the engine's native hex form
/// (`§x` followed by one section-prefixed character per hex digit).
/// Legacy `&<code>` sequences are left untouched.
pub fn translate_hex_only(message: &str) -> String {
    HEX_PATTERN
        .replace_all(message, |caps: &regex::Captures<'_>| {
            let mut out = String::with_capacity(14);
            out.push(SECTION);
            out.push('x');
            for c in caps[1].chars() {
                out.push(SECTION);
                out.push(c.to_ascii_lowercase());
            }
            out
        })
        .into_owned()
}

/// Converts `&<code>` to `§<code>` for every valid legacy code character,
/// lowercasing the code. Hex sequences are left untouched.
pub fn translate_legacy_only(message: &str) -> String {
    let mut chars: Vec<char> = message.chars().collect();
    for i in 0..chars.len().saturating_sub(1) {
        if chars[i] == '&' && LEGACY_CODE_CHARS.contains(chars[i + 1]) {
            chars[i] = SECTION;
            chars[i + 1] = chars[i + 1].to_ascii_lowercase();
        }
    }
    chars.into_iter().collect()
}

/// Removes section-sign codes, hex codes and ampersand codes, leaving plain
/// text. Used for console delivery and length calculations.
pub fn strip_color_codes(message: &str) -> String {
    let result = SECTION_CODES.replace_all(message, "");
    let result = HEX_CODES.replace_all(&result, "");
    AMPERSAND_CODES.replace_all(&result, "").into_owned()
}

pub fn has_color_codes(message: &str) -> bool {
    message.contains(SECTION) || HEX_PATTERN.is_match(message) || message.contains('&')
}
