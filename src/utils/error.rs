use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Failed to create directory {}: {}", .path.display(), .source)]
    DirectoryCreateError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file {}: {}", .path.display(), .source)]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write build declaration: {0}")]
    OutputError(#[source] std::io::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Filesystem,
    Configuration,
    Output,
}

impl ScaffoldError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DirectoryCreateError { .. } | Self::FileWriteError { .. } | Self::IoError(_) => {
                ErrorCategory::Filesystem
            }
            Self::OutputError(_) => ErrorCategory::Output,
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// 程序結束碼：檔案系統 1、配置 2、輸出 3
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Filesystem => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::Output => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::DirectoryCreateError { path, source }
                if source.kind() == std::io::ErrorKind::AlreadyExists =>
            {
                format!("Directory {} already exists", path.display())
            }
            Self::DirectoryCreateError { path, .. } => {
                format!("Could not create directory {}", path.display())
            }
            Self::FileWriteError { path, .. } => format!("Could not write {}", path.display()),
            Self::OutputError(_) => "Could not write to standard output".to_string(),
            Self::IoError(e) => format!("Filesystem error: {}", e),
            Self::ConfigValidationError { field, message } => {
                format!("Invalid configuration ({}): {}", field, message)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value for {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::DirectoryCreateError { source, .. }
                if source.kind() == std::io::ErrorKind::AlreadyExists =>
            {
                "Remove the previously generated day directories before running again"
            }
            Self::DirectoryCreateError { source, .. } | Self::FileWriteError { source, .. }
                if source.kind() == std::io::ErrorKind::PermissionDenied =>
            {
                "Check write permissions on the output root"
            }
            Self::DirectoryCreateError { .. } | Self::FileWriteError { .. } | Self::IoError(_) => {
                "Check that the output root exists, is writable, and has free space"
            }
            Self::OutputError(_) => "Check that standard output is not closed",
            Self::ConfigValidationError { .. } => "Check the configuration file syntax",
            Self::InvalidConfigValueError { .. } => {
                "Fix the offending value in the config file or on the command line"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
