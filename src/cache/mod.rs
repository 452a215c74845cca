pub mod key;
pub mod lru;
pub mod registry;

pub use key::{cache_key, Placeholders};
pub use lru::LruCache;
pub use registry::{CacheCategory, CacheRegistry, CategoryStats};
