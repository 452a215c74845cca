pub const DEFAULT_LOCALE: &str = "en_US";

pub const DEFAULT_STRING_CACHE_SIZE: usize = 1000;
pub const DEFAULT_LORE_CACHE_SIZE: usize = 250;
pub const DEFAULT_LORE_LIST_CACHE_SIZE: usize = 250;
pub const DEFAULT_ENTITY_NAME_CACHE_SIZE: usize = 250;
pub const DEFAULT_SMALL_CAPS_CACHE_SIZE: usize = 500;
pub const DEFAULT_MATERIAL_NAME_CACHE_SIZE: usize = 250;

pub const MISSING_MESSAGE_PREFIX: &str = "Missing message: ";
pub const DEFAULT_MESSAGE_PREFIX: &str = "&7[Server] &r";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
