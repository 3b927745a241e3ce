#[cfg(feature = "cli")]
pub mod cli;
pub mod storage;
pub mod toml_config;

use crate::core::{ConfigProvider, UnitLayout, UnitRange};
use crate::utils::error::{Result, ScaffoldError};
use crate::utils::validation::{
    validate_path_component, validate_range, validate_relative_dir, validate_root, Validate,
};
use serde::Serialize;
use std::path::PathBuf;
use toml_config::TomlConfig;

pub const DEFAULT_START: u32 = 1;
pub const DEFAULT_END: u32 = 25;
pub const DEFAULT_SRC_DIR: &str = "src";
pub const DEFAULT_DIR_PREFIX: &str = "day";
pub const DEFAULT_SOURCE_FILE: &str = "main.rs";
pub const DEFAULT_DATA_FILE: &str = "input.txt";

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaffoldConfig {
    pub start: u32,
    pub end: u32,
    pub root: PathBuf,
    pub src_dir: String,
    pub dir_prefix: String,
    pub source_file: String,
    pub data_file: String,
    pub dry_run: bool,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            end: DEFAULT_END,
            root: PathBuf::from("."),
            src_dir: DEFAULT_SRC_DIR.to_string(),
            dir_prefix: DEFAULT_DIR_PREFIX.to_string(),
            source_file: DEFAULT_SOURCE_FILE.to_string(),
            data_file: DEFAULT_DATA_FILE.to_string(),
            dry_run: false,
        }
    }
}

impl ScaffoldConfig {
    /// 以設定檔中有值的欄位覆蓋目前設定
    pub fn apply_file(&mut self, file: &TomlConfig) {
        if let Some(start) = file.range.start {
            self.start = start;
        }
        if let Some(end) = file.range.end {
            self.end = end;
        }
        if let Some(root) = &file.layout.root {
            self.root = root.clone();
        }
        if let Some(src_dir) = &file.layout.src_dir {
            self.src_dir = src_dir.clone();
        }
        if let Some(dir_prefix) = &file.layout.dir_prefix {
            self.dir_prefix = dir_prefix.clone();
        }
        if let Some(source_file) = &file.layout.source_file {
            self.source_file = source_file.clone();
        }
        if let Some(data_file) = &file.layout.data_file {
            self.data_file = data_file.clone();
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_range("range.start", self.start, 1, u32::MAX)?;
        validate_range("range.end", self.end, self.start, u32::MAX)?;

        validate_root("layout.root", &self.root.to_string_lossy())?;
        validate_relative_dir("layout.src_dir", &self.src_dir)?;
        validate_path_component("layout.dir_prefix", &self.dir_prefix)?;
        validate_path_component("layout.source_file", &self.source_file)?;
        validate_path_component("layout.data_file", &self.data_file)?;

        if self.source_file == self.data_file {
            return Err(ScaffoldError::InvalidConfigValueError {
                field: "layout.data_file".to_string(),
                value: self.data_file.clone(),
                reason: "Data file must differ from the source file".to_string(),
            });
        }

        Ok(())
    }
}

impl ConfigProvider for ScaffoldConfig {
    fn unit_range(&self) -> UnitRange {
        UnitRange::new(self.start, self.end)
    }

    fn layout(&self) -> UnitLayout {
        UnitLayout {
            root: self.root.clone(),
            src_dir: self.src_dir.clone(),
            dir_prefix: self.dir_prefix.clone(),
            source_file: self.source_file.clone(),
            data_file: self.data_file.clone(),
        }
    }
}

impl Validate for ScaffoldConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
