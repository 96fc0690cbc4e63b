use thiserror::Error;

#[derive(Error, Debug)]
pub enum WireError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown unit: {name}")]
    UnknownUnitError { name: String },
}

impl WireError {
    /// Exit code the CLI reports for this error. Configuration mistakes the
    /// user can correct map to 2, everything else to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            WireError::InvalidConfigValueError { .. }
            | WireError::MissingConfigError { .. }
            | WireError::UnknownUnitError { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, WireError>;
