// src/locale/data.rs
use serde_json::Value;

/// The four section files making up one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocaleSection {
    Messages,
    Gui,
    Formatting,
    Items,
}

impl LocaleSection {
    pub const ALL: [LocaleSection; 4] = [
        LocaleSection::Messages,
        LocaleSection::Gui,
        LocaleSection::Formatting,
        LocaleSection::Items,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            LocaleSection::Messages => "messages.json",
            LocaleSection::Gui => "gui.json",
            LocaleSection::Formatting => "formatting.json",
            LocaleSection::Items => "items.json",
        }
    }
}

/// One parsed section tree with dotted-path getters.
///
/// Paths address nested objects: `"shop.buy_button.name"` walks three levels.
#[derive(Debug, Clone)]
pub struct SectionData {
    root: Value,
}

impl SectionData {
    pub fn empty() -> Self {
        Self {
            root: Value::Object(serde_json::Map::new()),
        }
    }

    pub fn from_json_str(content: &str) -> serde_json::Result<Self> {
        Ok(Self {
            root: serde_json::from_str(content)?,
        })
    }

    fn lookup(&self, path: &str) -> Option<&Value> {
        let mut current = &self.root;
        for segment in path.split('.') {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Returns the scalar at `path` rendered as a string. Objects and arrays
    /// yield `None`.
    pub fn get_string(&self, path: &str) -> Option<String> {
        match self.lookup(path)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Returns the string elements of the array at `path`, empty if absent.
    pub fn get_string_list(&self, path: &str) -> Vec<String> {
        let Some(Value::Array(items)) = self.lookup(path) else {
            return Vec::new();
        };
        items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            })
            .collect()
    }

    pub fn get_bool(&self, path: &str, default: bool) -> bool {
        match self.lookup(path) {
            Some(Value::Bool(b)) => *b,
            _ => default,
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }
}

/// Immutable bundle of all four sections for one locale.
///
/// `with_section` replaces exactly one field and leaves the other three
/// untouched, so a per-section reload never mutates shared state.
#[derive(Debug, Clone)]
pub struct LocaleData {
    messages: SectionData,
    gui: SectionData,
    formatting: SectionData,
    items: SectionData,
}

impl LocaleData {
    pub fn new(
        messages: SectionData,
        gui: SectionData,
        formatting: SectionData,
        items: SectionData,
    ) -> Self {
        Self {
            messages,
            gui,
            formatting,
            items,
        }
    }

    pub fn empty() -> Self {
        Self::new(
            SectionData::empty(),
            SectionData::empty(),
            SectionData::empty(),
            SectionData::empty(),
        )
    }

    pub fn section(&self, section: LocaleSection) -> &SectionData {
        match section {
            LocaleSection::Messages => &self.messages,
            LocaleSection::Gui => &self.gui,
            LocaleSection::Formatting => &self.formatting,
            LocaleSection::Items => &self.items,
        }
    }

    pub fn with_section(self, section: LocaleSection, data: SectionData) -> Self {
        match section {
            LocaleSection::Messages => Self { messages: data, ..self },
            LocaleSection::Gui => Self { gui: data, ..self },
            LocaleSection::Formatting => Self { formatting: data, ..self },
            LocaleSection::Items => Self { items: data, ..self },
        }
    }

    pub fn messages(&self) -> &SectionData {
        &self.messages
    }

    pub fn gui(&self) -> &SectionData {
        &self.gui
    }

    pub fn formatting(&self) -> &SectionData {
        &self.formatting
    }

    pub fn items(&self) -> &SectionData {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SectionData {
        SectionData::from_json_str(
            r#"{
                "prefix": "&7[S] ",
                "welcome": {
                    "message": "Hello {player}",
                    "enabled": false,
                    "weight": 3
                },
                "lore": ["line one", "line two", 7],
                "nested": { "deep": { "value": "found" } }
            }"#,
        )
        .expect("sample json")
    }

    #[test]
    fn dotted_paths_walk_nested_objects() {
        let data = sample();
        assert_eq!(data.get_string("nested.deep.value").as_deref(), Some("found"));
        assert_eq!(data.get_string("welcome.message").as_deref(), Some("Hello {player}"));
        assert_eq!(data.get_string("missing.path"), None);
    }

    #[test]
    fn scalars_render_as_strings() {
        let data = sample();
        assert_eq!(data.get_string("welcome.weight").as_deref(), Some("3"));
        assert_eq!(data.get_string("welcome.enabled").as_deref(), Some("false"));
        assert_eq!(data.get_string("nested"), None);
    }

    #[test]
    fn string_lists_collect_scalars() {
        let data = sample();
        assert_eq!(data.get_string_list("lore"), vec!["line one", "line two", "7"]);
        assert!(data.get_string_list("prefix").is_empty());
        assert!(data.get_string_list("absent").is_empty());
    }

    #[test]
    fn bool_falls_back_to_default() {
        let data = sample();
        assert!(!data.get_bool("welcome.enabled", true));
        assert!(data.get_bool("welcome.missing", true));
        assert!(!data.get_bool("prefix", false));
    }

    #[test]
    fn with_section_replaces_exactly_one_field() {
        let base = LocaleData::empty();
        let replaced = base.with_section(LocaleSection::Gui, sample());

        assert!(replaced.gui().contains("prefix"));
        assert!(!replaced.messages().contains("prefix"));
        assert!(!replaced.formatting().contains("prefix"));
        assert!(!replaced.items().contains("prefix"));
    }
}
