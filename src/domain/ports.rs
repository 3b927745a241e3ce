use crate::domain::model::{UnitLayout, UnitRange};
use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    /// Creates missing parents, then the directory itself. Fails if the
    /// directory already exists.
    fn create_unit_dir(&self, path: &Path) -> Result<()>;

    /// Writes `data` to `path`, truncating any existing file.
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn unit_range(&self) -> UnitRange;
    fn layout(&self) -> UnitLayout;
}
