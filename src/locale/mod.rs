pub mod data;
pub mod error;
pub mod store;

pub use data::{LocaleData, LocaleSection, SectionData};
pub use error::LocaleError;
pub use store::LocaleStore;
