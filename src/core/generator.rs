use crate::core::template::render_source_stub;
use crate::core::{ConfigProvider, Storage, UnitIndex, UnitLayout};
use crate::utils::error::{Result, ScaffoldError};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub index: UnitIndex,
    pub directory: PathBuf,
    pub source_path: PathBuf,
    pub data_path: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub units: Vec<GeneratedUnit>,
}

pub struct ScaffoldGenerator<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    layout: UnitLayout,
}

impl<S: Storage, C: ConfigProvider> ScaffoldGenerator<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let layout = config.layout();
        Self {
            storage,
            config,
            layout,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// 依序產生每個單元，遇到第一個錯誤立即中止，不回滾已建立的單元
    pub fn run<W: Write>(&self, out: &mut W) -> Result<GenerationReport> {
        let mut report = GenerationReport::default();

        for index in self.config.unit_range().iter() {
            let unit = self.generate_unit(index, out)?;
            report.units.push(unit);
        }

        Ok(report)
    }

    pub fn generate_unit<W: Write>(&self, index: UnitIndex, out: &mut W) -> Result<GeneratedUnit> {
        let directory = self.layout.unit_dir(index);
        tracing::debug!("Creating {}", directory.display());
        self.storage.create_unit_dir(&directory)?;

        let source_path = self.layout.source_path(index);
        let stub = render_source_stub(&self.layout, index);
        self.storage.write_file(&source_path, stub.as_bytes())?;

        let data_path = self.layout.data_path(index);
        self.storage.write_file(&data_path, b"")?;

        let declaration = self.layout.declaration(index);
        writeln!(out, "{}", declaration).map_err(ScaffoldError::OutputError)?;
        out.flush().map_err(ScaffoldError::OutputError)?;

        tracing::debug!("Generated unit {}", declaration.name);

        Ok(GeneratedUnit {
            index,
            directory,
            source_path,
            data_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::UnitRange;
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::io::{Error, ErrorKind};
    use std::path::Path;

    #[derive(Default)]
    struct MemoryStorage {
        dirs: RefCell<Vec<PathBuf>>,
        files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
    }

    impl Storage for MemoryStorage {
        fn create_unit_dir(&self, path: &Path) -> Result<()> {
            let mut dirs = self.dirs.borrow_mut();
            if dirs.iter().any(|d| d == path) {
                return Err(ScaffoldError::DirectoryCreateError {
                    path: path.to_path_buf(),
                    source: Error::new(ErrorKind::AlreadyExists, "exists"),
                });
            }
            dirs.push(path.to_path_buf());
            Ok(())
        }

        fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
            self.files
                .borrow_mut()
                .insert(path.to_path_buf(), data.to_vec());
            Ok(())
        }
    }

    struct TestConfig {
        range: UnitRange,
    }

    impl ConfigProvider for TestConfig {
        fn unit_range(&self) -> UnitRange {
            self.range
        }

        fn layout(&self) -> UnitLayout {
            UnitLayout {
                root: PathBuf::from("/work"),
                src_dir: "src".to_string(),
                dir_prefix: "day".to_string(),
                source_file: "main.rs".to_string(),
                data_file: "input.txt".to_string(),
            }
        }
    }

    fn generator(start: u32, end: u32) -> ScaffoldGenerator<MemoryStorage, TestConfig> {
        ScaffoldGenerator::new(
            MemoryStorage::default(),
            TestConfig {
                range: UnitRange::new(start, end),
            },
        )
    }

    #[test]
    fn test_generate_unit_writes_both_files() {
        let generator = generator(1, 1);
        let mut out = Vec::new();

        let unit = generator.generate_unit(UnitIndex(4), &mut out).unwrap();

        assert_eq!(unit.directory, PathBuf::from("/work/src/day4"));
        let files = generator.storage().files.borrow();
        assert_eq!(files.len(), 2);
        assert!(files[&unit.data_path].is_empty());
        let stub = String::from_utf8(files[&unit.source_path].clone()).unwrap();
        assert!(stub.contains("src/day4/input.txt"));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[[bin]]\nname = \"day4\"\npath = \"src/day4/main.rs\"\n\n"
        );
    }

    #[test]
    fn test_run_visits_range_in_order() {
        let generator = generator(3, 6);
        let mut out = Vec::new();

        let report = generator.run(&mut out).unwrap();

        let indices: Vec<u32> = report.units.iter().map(|u| u.index.get()).collect();
        assert_eq!(indices, vec![3, 4, 5, 6]);
        assert_eq!(generator.storage().dirs.borrow().len(), 4);
    }

    #[test]
    fn test_collision_aborts_before_output() {
        let generator = generator(1, 3);
        generator
            .storage()
            .create_unit_dir(Path::new("/work/src/day2"))
            .unwrap();
        let mut out = Vec::new();

        let err = generator.run(&mut out).unwrap_err();

        assert!(matches!(err, ScaffoldError::DirectoryCreateError { .. }));
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("name = \"day1\""));
        assert!(!output.contains("day2"));
        assert!(!output.contains("day3"));
    }
}
