pub mod builder;
pub mod manager;
pub mod renderer;
pub mod service;
pub mod stats;

pub use builder::LanguageManagerBuilder;
pub use manager::{format_enum_name, LanguageManager};
pub use service::{ConsoleSink, DeliverySink, MessageService};
pub use stats::{CacheStats, Statistics};
