use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::identifiers::validation::validate_relative_path;
use crate::domain::{AppError, GeneratedProject};
use crate::ports::ProjectWriter;

pub const PACKAGE_JSON: &str = "package.json";
pub const ENV_TEMPLATE: &str = ".env.example";
pub const README: &str = "README.md";

/// Writes a generated project under a target directory.
#[derive(Debug, Clone)]
pub struct FilesystemProjectWriter {
    root: PathBuf,
    force: bool,
}

impl FilesystemProjectWriter {
    pub fn new(root: PathBuf) -> Self {
        Self { root, force: false }
    }

    /// Allow writing into a directory that already has content.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_writable_root(&self) -> Result<(), AppError> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
            return Ok(());
        }
        if !self.root.is_dir() {
            return Err(AppError::config_error(format!(
                "Output path '{}' exists and is not a directory",
                self.root.display()
            )));
        }
        if !self.force && fs::read_dir(&self.root)?.next().is_some() {
            return Err(AppError::OutputNotEmpty(self.root.display().to_string()));
        }
        Ok(())
    }

    fn write_file(&self, relative: &str, content: &str) -> Result<(), AppError> {
        if !validate_relative_path(relative) {
            return Err(AppError::UnsafeOutputPath(relative.to_string()));
        }
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(())
    }
}

impl ProjectWriter for FilesystemProjectWriter {
    fn write(&self, project: &GeneratedProject) -> Result<usize, AppError> {
        // Reject unsafe paths before touching the disk.
        if let Some(file) = project.files.iter().find(|f| !validate_relative_path(&f.path)) {
            return Err(AppError::UnsafeOutputPath(file.path.clone()));
        }
        self.ensure_writable_root()?;

        for file in &project.files {
            self.write_file(&file.path, &file.content)?;
        }
        self.write_file(PACKAGE_JSON, &project.package_json.to_json()?)?;
        self.write_file(ENV_TEMPLATE, &project.env_template)?;
        self.write_file(README, &project.readme)?;

        let written = project.files.len() + 3;
        tracing::debug!(root = %self.root.display(), written, "Wrote generated project");
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::{GeneratedFile, PackageManifest};
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn project(files: Vec<GeneratedFile>) -> GeneratedProject {
        GeneratedProject {
            files,
            package_json: PackageManifest {
                name: "acme".into(),
                version: "0.1.0".into(),
                private: true,
                description: String::new(),
                scripts: BTreeMap::new(),
                dependencies: BTreeMap::new(),
                dev_dependencies: BTreeMap::new(),
            },
            env_template: "API_KEY=\n".into(),
            readme: "# Acme\n".into(),
            setup_instructions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    #[test]
    fn writes_files_and_artifacts() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("site");
        let writer = FilesystemProjectWriter::new(out.clone());

        let written =
            writer.write(&project(vec![GeneratedFile::replacing("app/page.tsx", "page")])).unwrap();

        assert_eq!(written, 4);
        assert_eq!(fs::read_to_string(out.join("app/page.tsx")).unwrap(), "page");
        assert!(fs::read_to_string(out.join(PACKAGE_JSON)).unwrap().contains("\"name\": \"acme\""));
        assert_eq!(fs::read_to_string(out.join(ENV_TEMPLATE)).unwrap(), "API_KEY=\n");
        assert!(out.join(README).exists());
    }

    #[test]
    fn refuses_non_empty_directory_without_force() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("existing.txt"), "x").unwrap();

        let err = FilesystemProjectWriter::new(temp.path().to_path_buf())
            .write(&project(Vec::new()))
            .unwrap_err();
        assert!(matches!(err, AppError::OutputNotEmpty(_)));

        let written = FilesystemProjectWriter::new(temp.path().to_path_buf())
            .force(true)
            .write(&project(Vec::new()))
            .unwrap();
        assert_eq!(written, 3);
    }

    #[test]
    fn rejects_escaping_paths_before_writing() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("site");

        let err = FilesystemProjectWriter::new(out.clone())
            .write(&project(vec![GeneratedFile::replacing("../evil.txt", "x")]))
            .unwrap_err();

        assert!(matches!(err, AppError::UnsafeOutputPath(_)));
        assert!(!out.exists());
    }
}
