use crate::core::Storage;
use crate::utils::error::{Result, ScaffoldError};
use std::cell::RefCell;
use std::fs;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn create_unit_dir(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ScaffoldError::DirectoryCreateError {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        // create_dir 而非 create_dir_all：目錄已存在時必須失敗
        fs::create_dir(path).map_err(|source| ScaffoldError::DirectoryCreateError {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        fs::write(path, data).map_err(|source| ScaffoldError::FileWriteError {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedOperation {
    CreateDir(PathBuf),
    WriteFile { path: PathBuf, bytes: usize },
}

/// Records what a run would do. A unit directory that already exists on
/// disk (or was planned earlier in the same run), or a file sitting where
/// a parent directory belongs, fails the same way a real run would.
#[derive(Debug, Default)]
pub struct DryRunStorage {
    planned: RefCell<Vec<PlannedOperation>>,
}

impl DryRunStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn planned(&self) -> Vec<PlannedOperation> {
        self.planned.borrow().clone()
    }

    fn already_planned(&self, path: &Path) -> bool {
        self.planned
            .borrow()
            .iter()
            .any(|op| matches!(op, PlannedOperation::CreateDir(dir) if dir == path))
    }
}

impl Storage for DryRunStorage {
    fn create_unit_dir(&self, path: &Path) -> Result<()> {
        // 祖先路徑若已存在但不是目錄，真正執行時 create_dir_all 會失敗
        if let Some(blocker) = path
            .ancestors()
            .skip(1)
            .find(|ancestor| ancestor.exists() && !ancestor.is_dir())
        {
            return Err(ScaffoldError::DirectoryCreateError {
                path: blocker.to_path_buf(),
                source: Error::new(ErrorKind::AlreadyExists, "file exists where a directory is needed"),
            });
        }

        if path.exists() || self.already_planned(path) {
            return Err(ScaffoldError::DirectoryCreateError {
                path: path.to_path_buf(),
                source: Error::new(ErrorKind::AlreadyExists, "directory already exists"),
            });
        }

        tracing::info!("🔍 Would create directory {}", path.display());
        self.planned
            .borrow_mut()
            .push(PlannedOperation::CreateDir(path.to_path_buf()));
        Ok(())
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        tracing::info!("🔍 Would write {} ({} bytes)", path.display(), data.len());
        self.planned.borrow_mut().push(PlannedOperation::WriteFile {
            path: path.to_path_buf(),
            bytes: data.len(),
        });
        Ok(())
    }
}
