// Service exports
pub mod catalog;
pub mod surveys;

pub use catalog::{CatalogError, CatalogStore};
pub use surveys::SurveyStore;
