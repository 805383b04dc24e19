//! Spring MVC source generator: one controller and one service interface per
//! resource group, one class per model.

pub mod emitters;
pub mod error;
pub mod generator;
pub mod type_mapper;

pub use error::GeneratorError;
pub use generator::{SpringConfig, SpringMvcGenerator};
