//! Project configuration loading from JSON or YAML files.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, ProjectConfig};

/// Serialization format of a config file, picked by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// `.yml` / `.yaml` are YAML; everything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
            Some("yml") | Some("yaml") => ConfigFormat::Yaml,
            _ => ConfigFormat::Json,
        }
    }
}

pub fn parse_project_config(
    content: &str,
    format: ConfigFormat,
) -> Result<ProjectConfig, AppError> {
    let config: ProjectConfig = match format {
        ConfigFormat::Json => serde_json::from_str(content)?,
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
    };
    if config.project_name.trim().is_empty() {
        return Err(AppError::config_error("projectName must not be empty"));
    }
    Ok(config)
}

/// Read and parse a project config file.
pub fn load_project_config(path: &Path) -> Result<ProjectConfig, AppError> {
    let content = fs::read_to_string(path).map_err(|e| AppError::ProjectConfigParse {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;
    parse_project_config(&content, ConfigFormat::from_path(path)).map_err(|e| match e {
        AppError::Json(_) | AppError::Yaml(_) | AppError::Configuration(_) => {
            let details = e.to_string();
            AppError::ProjectConfigParse { path: path.display().to_string(), details }
        }
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn format_follows_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("site.yaml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("site.YML")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("site.json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("site")), ConfigFormat::Json);
    }

    #[test]
    fn parses_yaml() {
        let config = parse_project_config(
            "projectName: Acme\nbranding:\n  primaryColor: \"#F97316\"\nintegrations:\n  payments: stripe\n",
            ConfigFormat::Yaml,
        )
        .unwrap();

        assert_eq!(config.project_name, "Acme");
        assert_eq!(config.template, "nextjs");
        assert_eq!(config.integrations.get("payments").map(String::as_str), Some("stripe"));
    }

    #[test]
    fn rejects_blank_project_name() {
        let err = parse_project_config(
            r##"{ "projectName": "  ", "branding": { "primaryColor": "#000" } }"##,
            ConfigFormat::Json,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn load_reports_path_on_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_project_config(&path).unwrap_err();

        match err {
            AppError::ProjectConfigParse { path: reported, .. } => {
                assert!(reported.ends_with("broken.json"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_a_parse_error() {
        let err = load_project_config(Path::new("/nonexistent/siteforge.json")).unwrap_err();
        assert!(matches!(err, AppError::ProjectConfigParse { .. }));
    }
}
