use crate::domain::generators::AnalysisOutput;
use crate::domain::manifest::Manifest;

/// Per-generator file counts reported after an analysis-driven generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisSummary {
    pub style: usize,
    pub structure: usize,
    pub sections: usize,
    pub feature_stubs: usize,
}

impl AnalysisSummary {
    pub fn of(output: &AnalysisOutput) -> Self {
        Self {
            style: output.style.len(),
            structure: output.structure.len(),
            sections: output.sections.len(),
            feature_stubs: output.feature_stubs.len(),
        }
    }
}

/// Integration post-install notes, then the analysis summary, then the feature list.
pub fn build_setup_instructions(
    integrations: &[&Manifest],
    features: &[&Manifest],
    analysis: Option<AnalysisSummary>,
) -> Vec<String> {
    let mut notes = vec![
        "Install dependencies with `npm install`.".to_string(),
        "Copy `.env.example` to `.env.local` and fill in the values.".to_string(),
    ];

    for manifest in integrations {
        for step in &manifest.post_install {
            notes.push(format!("[{}] {}", manifest.qualified_name(), step));
        }
    }

    if let Some(summary) = analysis {
        notes.push(format!(
            "Generated from website analysis: {} style file(s), {} structure file(s), {} section component(s), {} feature stub(s).",
            summary.style, summary.structure, summary.sections, summary.feature_stubs
        ));
    }

    if !features.is_empty() {
        let ids: Vec<&str> = features.iter().map(|m| m.id.as_str()).collect();
        notes.push(format!("Features included: {}.", ids.join(", ")));
        for manifest in features {
            for step in &manifest.post_install {
                notes.push(format!("[{}] {}", manifest.qualified_name(), step));
            }
        }
    }

    notes.push("Start the development server with `npm run dev`.".to_string());
    notes
}
