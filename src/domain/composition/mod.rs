//! Composition domain: merging sources, branding, and cross-manifest checks.

pub mod branding;
pub mod feature_graph;
pub mod merge;
pub mod validation;

pub use branding::{BrandingToken, BrandingValues, apply_branding};
pub use feature_graph::{FeatureGraph, FeatureResolution};
pub use merge::{
    FileTree, MergeOutcome, MergedProject, ProjectMerger, SourceContribution, merge_sources,
};
pub use validation::check_required_integrations;
