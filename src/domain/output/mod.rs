//! Output assembler: turns a merged, branded project into the terminal record.

mod env_template;
mod package_manifest;
mod readme;
mod setup_notes;

pub use env_template::render_env_template;
pub use package_manifest::{INITIAL_VERSION, build_package_manifest, package_name};
pub use readme::{ReadmeInput, render_readme, render_readme_or_fallback};
pub use setup_notes::{AnalysisSummary, build_setup_instructions};

use crate::domain::composition::MergedProject;
use crate::domain::manifest::Manifest;
use crate::domain::project::{GeneratedProject, ProjectConfig};

/// Everything the assembler needs besides the merged tree.
pub struct AssemblyInput<'a> {
    pub config: &'a ProjectConfig,
    /// Id of the base template actually used.
    pub template: &'a str,
    pub integrations: &'a [&'a Manifest],
    /// Features in resolved order.
    pub features: &'a [&'a Manifest],
    pub analysis: Option<AnalysisSummary>,
    pub warnings: Vec<String>,
}

pub fn assemble(merged: MergedProject, input: AssemblyInput<'_>) -> GeneratedProject {
    let MergedProject { files, dependencies, dev_dependencies, env } = merged;

    let package_json = build_package_manifest(input.config, dependencies, dev_dependencies);
    let env_template = render_env_template(&env);
    let setup_instructions =
        build_setup_instructions(input.integrations, input.features, input.analysis);
    let readme = render_readme_or_fallback(&ReadmeInput {
        config: input.config,
        template: input.template,
        integrations: input.integrations,
        features: input.features,
        env: &env,
        setup: &setup_instructions,
    });

    GeneratedProject {
        files,
        package_json,
        env_template,
        readme,
        setup_instructions,
        warnings: input.warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::manifest::EnvVarSpec;
    use crate::domain::project::{Branding, GeneratedFile};

    #[test]
    fn assembles_record_without_adding_files() {
        let config = ProjectConfig::new("Acme", Branding::new("#F97316"));
        let mut merged = MergedProject::default();
        merged.files.push(GeneratedFile::replacing("app/page.tsx", "page"));
        merged.dependencies.insert("next".into(), "14.2.0".into());
        merged.env.push(EnvVarSpec::new("API_KEY", "first"));

        let project = assemble(
            merged,
            AssemblyInput {
                config: &config,
                template: "nextjs",
                integrations: &[],
                features: &[],
                analysis: None,
                warnings: vec!["heads up".into()],
            },
        );

        assert_eq!(project.paths(), vec!["app/page.tsx"]);
        assert_eq!(project.package_json.name, "acme");
        assert!(project.env_template.contains("API_KEY="));
        assert!(project.readme.starts_with("# Acme"));
        assert_eq!(project.warnings, vec!["heads up".to_string()]);
    }
}
