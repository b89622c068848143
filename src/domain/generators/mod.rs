//! Analysis-derived generators.
//!
//! Four independent, pure sub-generators turn an [`Analysis`] into files:
//! style (theme config and stylesheet), structure (pages, header, footer,
//! layout), section stubs, and detected-feature stubs.

pub mod color;
pub mod feature_stubs;
pub mod naming;
pub mod sections;
pub mod structure;
pub mod style;

use crate::domain::analysis::Analysis;
use crate::domain::composition::SourceContribution;
use crate::domain::project::{GeneratedFile, ProjectConfig};

pub use feature_stubs::{StubKind, classify, generate_feature_stubs};
pub use sections::{PLACEHOLDER_COMPONENT, SectionComponent, component_for, generate_section_stubs};
pub use structure::{generate_structure, route_collisions};
pub use style::generate_style;

/// Files produced from one analysis, grouped by sub-generator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisOutput {
    pub style: Vec<GeneratedFile>,
    pub structure: Vec<GeneratedFile>,
    pub sections: Vec<GeneratedFile>,
    pub feature_stubs: Vec<GeneratedFile>,
    /// Problems found in the analysis itself (e.g. colliding page routes).
    pub warnings: Vec<String>,
}

impl AnalysisOutput {
    pub fn generate(analysis: &Analysis, config: &ProjectConfig) -> Self {
        let tokens = &analysis.visual_tokens;
        let output = Self {
            style: generate_style(tokens, config),
            structure: generate_structure(&analysis.structure, tokens.dark_mode()),
            sections: generate_section_stubs(&analysis.structure),
            feature_stubs: generate_feature_stubs(&analysis.detected_features),
            warnings: route_collisions(&analysis.structure),
        };
        for warning in &output.warnings {
            tracing::warn!("{}", warning);
        }
        tracing::debug!(
            style = output.style.len(),
            structure = output.structure.len(),
            sections = output.sections.len(),
            feature_stubs = output.feature_stubs.len(),
            "Generated files from analysis"
        );
        output
    }

    pub fn file_count(&self) -> usize {
        self.style.len() + self.structure.len() + self.sections.len() + self.feature_stubs.len()
    }

    /// One merge source, in style > structure > sections > feature stubs order.
    pub fn into_contribution(self) -> SourceContribution {
        let mut files = self.style;
        files.extend(self.structure);
        files.extend(self.sections);
        files.extend(self.feature_stubs);
        SourceContribution::with_files("analysis", files)
    }
}
