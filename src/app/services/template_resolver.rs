//! Turns manifest file descriptors into generated files.

use std::path::Path;

use crate::domain::composition::SourceContribution;
use crate::domain::manifest::{FileDescriptor, Manifest};
use crate::domain::project::GeneratedFile;

/// Values available while materializing descriptors.
#[derive(Debug, Clone, Copy)]
pub struct SubstitutionContext<'a> {
    pub project_name: &'a str,
}

/// Materialize every descriptor of a manifest, in declaration order.
///
/// Token transforms are left to the branding pass. A descriptor whose body is
/// missing still yields a file, holding a comment stub.
pub fn resolve_files(manifest: &Manifest, ctx: &SubstitutionContext<'_>) -> Vec<GeneratedFile> {
    manifest
        .files
        .iter()
        .map(|descriptor| {
            let content = match manifest.body(&descriptor.template) {
                Some(body) => body.to_string(),
                None => {
                    tracing::debug!(
                        manifest = %manifest.qualified_name(),
                        template = %descriptor.template,
                        "Template body missing, emitting stub"
                    );
                    missing_body_stub(manifest, descriptor, ctx)
                }
            };
            GeneratedFile::new(descriptor.path.clone(), content, descriptor.overwrite())
        })
        .collect()
}

/// Files, packages, and env of a manifest as one merge source.
pub fn contribution(manifest: &Manifest, ctx: &SubstitutionContext<'_>) -> SourceContribution {
    SourceContribution {
        label: manifest.qualified_name(),
        files: resolve_files(manifest, ctx),
        dependencies: manifest.dependencies.packages.clone(),
        dev_dependencies: manifest.dependencies.dev_packages.clone(),
        env: manifest.dependencies.env.clone(),
    }
}

fn missing_body_stub(
    manifest: &Manifest,
    descriptor: &FileDescriptor,
    ctx: &SubstitutionContext<'_>,
) -> String {
    let message = format!(
        "{} for {}: template '{}' from {} is not available yet.",
        descriptor.path,
        ctx.project_name,
        descriptor.template,
        manifest.qualified_name()
    );
    let extension = Path::new(&descriptor.path).extension().and_then(|e| e.to_str()).unwrap_or("");
    match extension {
        "ts" | "tsx" | "js" | "jsx" | "mjs" | "cjs" => format!("// {message}\n"),
        "css" => format!("/* {message} */\n"),
        "json" => "{}\n".to_string(),
        _ => format!("# {message}\n"),
    }
}
