use crate::utils::error::{Result, ScaffoldError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> ScaffoldError {
    ScaffoldError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Layout values end up inside quoted TOML and Rust string literals.
pub fn validate_quotable(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field_name, value, "Value cannot be blank"));
    }

    match value.chars().find(|c| *c == '"' || *c == '\\' || c.is_control()) {
        Some(c) => Err(invalid(
            field_name,
            value,
            format!("Value must not contain {:?}", c),
        )),
        None => Ok(()),
    }
}

/// 相對於專案根目錄的 `/` 分隔路徑
pub fn validate_relative_dir(field_name: &str, value: &str) -> Result<()> {
    validate_quotable(field_name, value)?;

    if value.starts_with('/') {
        return Err(invalid(
            field_name,
            value,
            "Value must be relative to the project root",
        ));
    }
    if value.split('/').any(|segment| segment == "..") {
        return Err(invalid(field_name, value, "Value must not leave the project root"));
    }
    Ok(())
}

/// 檔名或目錄前綴必須是單一路徑元件
pub fn validate_path_component(field_name: &str, value: &str) -> Result<()> {
    validate_quotable(field_name, value)?;

    if value.contains('/') {
        return Err(invalid(field_name, value, "Value must not contain path separators"));
    }
    if value == "." || value == ".." {
        return Err(invalid(field_name, value, "Value must name a file or directory"));
    }
    Ok(())
}

pub fn validate_root(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() || value.contains('\0') {
        return Err(invalid(field_name, value, "Path must be non-empty and free of NUL bytes"));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}
