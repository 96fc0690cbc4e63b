use crate::utils::error::{Result, WireError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(WireError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unit_label(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(WireError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Unit labels contain only ASCII letters and digits".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(WireError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(WireError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(WireError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_unit_label() {
        assert!(validate_unit_label("unit", "AAA").is_ok());
        assert!(validate_unit_label("unit", "AAA2").is_ok());
        assert!(validate_unit_label("unit", "").is_err());
        assert!(validate_unit_label("unit", "  ").is_err());
        assert!(validate_unit_label("unit", "A/AA").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", "run.toml").is_ok());
        assert!(validate_path("config", "").is_err());
        assert!(validate_path("config", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("logging.level", "debug", &["debug", "info"]).is_ok());
        assert!(validate_one_of("logging.level", "loud", &["debug", "info"]).is_err());
    }
}
