use crate::config::toml_config::TomlConfig;
use crate::config::ScaffoldConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "day-scaffold")]
#[command(about = "Generate numbered day directories with a source stub and an empty input file")]
pub struct CliConfig {
    /// First unit index
    #[arg(long)]
    pub start: Option<u32>,

    /// Last unit index (inclusive)
    #[arg(long)]
    pub end: Option<u32>,

    /// Project root the units are written under
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Source directory, relative to the root
    #[arg(long)]
    pub src_dir: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the build declarations without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// defaults < 設定檔 < 命令列參數
    pub fn resolve(&self) -> Result<ScaffoldConfig> {
        let mut config = ScaffoldConfig::default();

        if let Some(path) = &self.config {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            let file = TomlConfig::from_file(path)?;
            config.apply_file(&file);
        }

        if let Some(start) = self.start {
            config.start = start;
        }
        if let Some(end) = self.end {
            config.end = end;
        }
        if let Some(root) = &self.root {
            config.root = root.clone();
        }
        if let Some(src_dir) = &self.src_dir {
            config.src_dir = src_dir.clone();
        }
        config.dry_run = self.dry_run;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_arguments_uses_defaults() {
        let cli = CliConfig::try_parse_from(["day-scaffold"]).unwrap();
        assert_eq!(cli.resolve().unwrap(), ScaffoldConfig::default());
    }

    #[test]
    fn test_range_flags() {
        let cli = CliConfig::try_parse_from(["day-scaffold", "--start", "2", "--end", "4"]).unwrap();
        let config = cli.resolve().unwrap();

        assert_eq!(config.start, 2);
        assert_eq!(config.end, 4);
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[range]\nstart = 3\nend = 10\n[layout]\nroot = \"/from/file\"\n")
            .unwrap();
        let config_path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::try_parse_from([
            "day-scaffold",
            "--config",
            config_path.as_str(),
            "--end",
            "5",
            "--dry-run",
        ])
        .unwrap();
        let config = cli.resolve().unwrap();

        assert_eq!(config.start, 3);
        assert_eq!(config.end, 5);
        assert_eq!(config.root, PathBuf::from("/from/file"));
        assert!(config.dry_run);
    }

    #[test]
    fn test_rejects_non_numeric_range() {
        assert!(CliConfig::try_parse_from(["day-scaffold", "--start", "one"]).is_err());
    }
}
