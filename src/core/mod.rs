pub mod engine;
pub mod generator;
pub mod template;

pub use crate::domain::model::{BuildDeclaration, UnitIndex, UnitLayout, UnitRange};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
