mod disclosure;
mod error;
mod icons;
mod record;
mod store;

pub mod panel;

pub use disclosure::{Disclosure, Panel};
pub use error::CatalogError;
pub use icons::{monogram, TechIcon, TechIconTable};
pub use panel::{PanelContent, StackEntry};
pub use record::{ListField, Project};
pub use store::Catalog;
