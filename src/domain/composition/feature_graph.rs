//! Feature selection resolution.

use std::collections::{BTreeMap, BTreeSet};

use tracing::warn;

use crate::domain::manifest::Manifest;
use crate::ports::ManifestCatalog;

/// Selected features in merge order, plus any selection diagnostics.
#[derive(Debug, Clone, Default)]
pub struct FeatureResolution<'a> {
    pub ordered: Vec<&'a Manifest>,
    pub warnings: Vec<String>,
}

impl FeatureResolution<'_> {
    pub fn ids(&self) -> Vec<String> {
        self.ordered.iter().map(|manifest| manifest.id.to_string()).collect()
    }
}

/// Domain logic for ordering selected features.
pub struct FeatureGraph;

impl FeatureGraph {
    /// Resolve selected feature ids against the catalog.
    ///
    /// Unknown ids and duplicate selections are skipped. Dependencies are never
    /// added implicitly: a missing one is reported as a warning. Selected features
    /// are ordered dependencies-first using Kahn's algorithm, ties broken by
    /// selection order; a cycle keeps the selection order and is reported.
    pub fn resolve<'a, C>(selected: &[String], catalog: &'a C) -> FeatureResolution<'a>
    where
        C: ManifestCatalog + ?Sized,
    {
        let mut warnings = Vec::new();
        let mut chosen: Vec<&'a Manifest> = Vec::new();

        for raw in selected {
            let id = raw.trim();
            if chosen.iter().any(|manifest| manifest.id.as_str() == id) {
                continue;
            }
            match catalog.feature(id) {
                Some(manifest) => chosen.push(manifest),
                None => {
                    warn!(feature = %id, "unknown feature skipped");
                    warnings.push(format!("Unknown feature '{}' was skipped", id));
                }
            }
        }

        let position: BTreeMap<&str, usize> =
            chosen.iter().enumerate().map(|(i, manifest)| (manifest.id.as_str(), i)).collect();

        // Edge dep -> dependent; dependents wait for their dependencies.
        let mut in_degree = vec![0usize; chosen.len()];
        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); chosen.len()];

        for (index, manifest) in chosen.iter().enumerate() {
            for dependency in manifest.required_features() {
                match position.get(dependency.as_str()) {
                    Some(&dep_index) if dep_index != index => {
                        in_degree[index] += 1;
                        dependents[dep_index].push(index);
                    }
                    Some(_) => {}
                    None => warnings.push(format!(
                        "Feature '{}' requires feature '{}', which is not selected",
                        manifest.id, dependency
                    )),
                }
            }
        }

        let mut ready: BTreeSet<usize> =
            in_degree.iter().enumerate().filter(|(_, deg)| **deg == 0).map(|(i, _)| i).collect();
        let mut order: Vec<usize> = Vec::with_capacity(chosen.len());

        while let Some(current) = ready.pop_first() {
            order.push(current);
            for &dependent in &dependents[current] {
                in_degree[dependent] -= 1;
                if in_degree[dependent] == 0 {
                    ready.insert(dependent);
                }
            }
        }

        if order.len() != chosen.len() {
            let remaining: Vec<&str> = in_degree
                .iter()
                .enumerate()
                .filter(|(_, deg)| **deg > 0)
                .map(|(i, _)| chosen[i].id.as_str())
                .collect();
            warn!(features = %remaining.join(", "), "circular feature dependency");
            warnings.push(format!(
                "Circular feature dependency detected: {}; keeping selection order",
                remaining.join(", ")
            ));
            return FeatureResolution { ordered: chosen, warnings };
        }

        let ordered = order.into_iter().map(|i| chosen[i]).collect();
        FeatureResolution { ordered, warnings }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;
    use crate::testing::{MemoryCatalog, feature_manifest};

    fn catalog(features: &[(&str, &[&str])]) -> MemoryCatalog {
        let mut catalog = MemoryCatalog::new();
        for (id, deps) in features {
            catalog.add(feature_manifest(id, deps));
        }
        catalog
    }

    fn selection(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn keeps_selection_order_without_dependencies() {
        let catalog = catalog(&[("seo", &[]), ("blog", &[]), ("i18n", &[])]);

        let resolution = FeatureGraph::resolve(&selection(&["blog", "seo", "i18n"]), &catalog);

        assert_eq!(resolution.ids(), vec!["blog", "seo", "i18n"]);
        assert!(resolution.warnings.is_empty());
    }

    #[test]
    fn dependencies_come_first() {
        let catalog = catalog(&[("blog", &["seo"]), ("seo", &[])]);

        let resolution = FeatureGraph::resolve(&selection(&["blog", "seo"]), &catalog);

        assert_eq!(resolution.ids(), vec!["seo", "blog"]);
        assert!(resolution.warnings.is_empty());
    }

    #[test]
    fn missing_dependency_is_a_warning_not_an_addition() {
        let catalog = catalog(&[("blog", &["seo"]), ("seo", &[])]);

        let resolution = FeatureGraph::resolve(&selection(&["blog"]), &catalog);

        assert_eq!(resolution.ids(), vec!["blog"]);
        assert_eq!(resolution.warnings.len(), 1);
        assert!(resolution.warnings[0].contains("'blog' requires feature 'seo'"));
    }

    #[test]
    fn unknown_and_duplicate_features_are_skipped() {
        let catalog = catalog(&[("blog", &[])]);

        let resolution =
            FeatureGraph::resolve(&selection(&["blog", "teleport", "blog"]), &catalog);

        assert_eq!(resolution.ids(), vec!["blog"]);
        assert_eq!(resolution.warnings, vec!["Unknown feature 'teleport' was skipped"]);
    }

    #[test]
    fn cycle_keeps_selection_order_and_warns() {
        let catalog = catalog(&[("a", &["b"]), ("b", &["a"]), ("c", &[])]);

        let resolution = FeatureGraph::resolve(&selection(&["a", "b", "c"]), &catalog);

        assert_eq!(resolution.ids(), vec!["a", "b", "c"]);
        assert!(resolution.warnings.iter().any(|w| w.contains("Circular feature dependency")));
    }

    proptest! {
        #[test]
        fn resolved_order_respects_dependencies(
            edges in prop::collection::vec((0usize..6, 0usize..6), 0..10)
        ) {
            // Only forward edges (higher index depends on lower) so the graph stays acyclic.
            let names: Vec<String> = (0..6).map(|i| format!("f{i}")).collect();
            let mut deps: Vec<Vec<&str>> = vec![Vec::new(); 6];
            for (from, to) in edges {
                if from > to {
                    deps[from].push(names[to].as_str());
                }
            }
            let mut catalog = MemoryCatalog::new();
            for (i, name) in names.iter().enumerate() {
                catalog.add(feature_manifest(name, &deps[i]));
            }
            let requested: Vec<String> = names.iter().rev().cloned().collect();

            let resolution = FeatureGraph::resolve(&requested, &catalog);

            prop_assert!(resolution.warnings.is_empty());
            let ids = resolution.ids();
            prop_assert_eq!(ids.len(), 6);
            let mut seen: HashSet<&str> = HashSet::new();
            for id in &ids {
                let index: usize = id[1..].parse().unwrap();
                for dep in &deps[index] {
                    prop_assert!(seen.contains(dep));
                }
                seen.insert(id.as_str());
            }
        }
    }
}
