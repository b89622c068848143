use std::io;

use thiserror::Error;

/// Library-wide error type for siteforge operations.
///
/// The composition engine itself never fails; these errors belong to the
/// surfaces around it (catalog loading, config loading, writing output).
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Manifest or template identifier is invalid.
    #[error(
        "Invalid manifest identifier '{0}': must be alphanumeric with hyphens, underscores, or periods"
    )]
    InvalidManifestId(String),

    /// Embedded manifest could not be loaded.
    #[error("Invalid manifest '{manifest}': {reason}")]
    InvalidManifest { manifest: String, reason: String },

    /// Manifest lookup failed in a context where the caller asked for it explicitly.
    #[error("Manifest '{name}' not found. Available: {available}")]
    ManifestNotFound { name: String, available: String },

    /// Project configuration file could not be read or parsed.
    #[error("Failed to parse project config {path}: {details}")]
    ProjectConfigParse { path: String, details: String },

    /// Output directory already has content.
    #[error("Output directory '{0}' is not empty (use --force to write anyway)")]
    OutputNotEmpty(String),

    /// Generated path escapes the output directory.
    #[error("Refusing to write '{0}' outside the output directory")]
    UnsafeOutputPath(String),

    /// README rendering failed.
    #[error("Template rendering failed: {0}")]
    TemplateRender(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidManifestId(_)
            | AppError::InvalidManifest { .. }
            | AppError::ProjectConfigParse { .. }
            | AppError::UnsafeOutputPath(_)
            | AppError::Json(_)
            | AppError::Yaml(_)
            | AppError::TomlParse(_) => io::ErrorKind::InvalidInput,
            AppError::ManifestNotFound { .. } => io::ErrorKind::NotFound,
            AppError::OutputNotEmpty(_) => io::ErrorKind::AlreadyExists,
            AppError::TemplateRender(_) => io::ErrorKind::Other,
        }
    }
}
