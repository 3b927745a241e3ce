use std::fmt;
use std::path::PathBuf;

/// One numbered scaffold unit ("day").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnitIndex(pub u32);

impl UnitIndex {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for UnitIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Closed range of unit indices, iterated in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitRange {
    pub start: u32,
    pub end: u32,
}

impl UnitRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn iter(&self) -> impl Iterator<Item = UnitIndex> {
        (self.start..=self.end).map(UnitIndex)
    }

    pub fn len(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            (self.end - self.start) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Naming convention shared by every unit.
///
/// `root` is where files are written. Paths embedded in generated text
/// (the stub's input path and the `[[bin]]` path) are relative to it and
/// always use `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitLayout {
    pub root: PathBuf,
    pub src_dir: String,
    pub dir_prefix: String,
    pub source_file: String,
    pub data_file: String,
}

impl UnitLayout {
    pub fn unit_name(&self, index: UnitIndex) -> String {
        format!("{}{}", self.dir_prefix, index)
    }

    pub fn unit_dir(&self, index: UnitIndex) -> PathBuf {
        let mut dir = self.root.clone();
        for segment in self.src_dir.split('/').filter(|s| !s.is_empty()) {
            dir.push(segment);
        }
        dir.push(self.unit_name(index));
        dir
    }

    pub fn source_path(&self, index: UnitIndex) -> PathBuf {
        self.unit_dir(index).join(&self.source_file)
    }

    pub fn data_path(&self, index: UnitIndex) -> PathBuf {
        self.unit_dir(index).join(&self.data_file)
    }

    pub fn project_relative(&self, index: UnitIndex, file_name: &str) -> String {
        let src_dir = self.src_dir.trim_end_matches('/');
        format!("{}/{}/{}", src_dir, self.unit_name(index), file_name)
    }

    pub fn declaration(&self, index: UnitIndex) -> BuildDeclaration {
        BuildDeclaration {
            name: self.unit_name(index),
            path: self.project_relative(index, &self.source_file),
        }
    }
}

/// `[[bin]]` target entry printed for each unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildDeclaration {
    pub name: String,
    pub path: String,
}

impl fmt::Display for BuildDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[[bin]]")?;
        writeln!(f, "name = \"{}\"", self.name)?;
        writeln!(f, "path = \"{}\"", self.path)
    }
}
