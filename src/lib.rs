pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::storage::{DryRunStorage, LocalStorage, PlannedOperation};
pub use config::{toml_config::TomlConfig, ScaffoldConfig};
pub use core::engine::ScaffoldEngine;
pub use core::generator::{GeneratedUnit, GenerationReport, ScaffoldGenerator};
pub use domain::model::{BuildDeclaration, UnitIndex, UnitLayout, UnitRange};
pub use utils::error::{Result, ScaffoldError};
