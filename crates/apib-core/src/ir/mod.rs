pub mod actions;
pub mod models;
pub mod types;

pub use actions::*;
pub use models::*;
pub use types::{ApiModel, GroupDefinition, NormalizedName};
