//! Merge engine: folds ordered file-set sources into one path-keyed tree.

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::debug;

use crate::domain::manifest::EnvVarSpec;
use crate::domain::project::GeneratedFile;

/// Everything one source contributes: files, packages, and environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceContribution {
    /// Name used in diagnostics (`template/nextjs`, `payments/stripe`, `analysis/style`).
    pub label: String,
    pub files: Vec<GeneratedFile>,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
    pub env: Vec<EnvVarSpec>,
}

impl SourceContribution {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), ..Self::default() }
    }

    pub fn with_files(label: impl Into<String>, files: Vec<GeneratedFile>) -> Self {
        Self { label: label.into(), files, ..Self::default() }
    }
}

/// What happened to an incoming file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Path was free.
    Inserted,
    /// Path was taken and the incoming file declared `overwrite`.
    Replaced,
    /// Path was taken and the incoming file did not declare `overwrite`.
    Kept,
}

/// Path -> file map that remembers first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct FileTree {
    files: Vec<GeneratedFile>,
    index: HashMap<String, usize>,
}

impl FileTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the overwrite rule for one file.
    ///
    /// The first file for a path is stored; a later file replaces it only when it
    /// declares `overwrite`. A replaced entry keeps its original position.
    pub fn insert(&mut self, file: GeneratedFile) -> MergeOutcome {
        match self.index.get(&file.path) {
            None => {
                self.index.insert(file.path.clone(), self.files.len());
                self.files.push(file);
                MergeOutcome::Inserted
            }
            Some(&slot) if file.overwrite => {
                self.files[slot] = file;
                MergeOutcome::Replaced
            }
            Some(_) => MergeOutcome::Kept,
        }
    }

    pub fn get(&self, path: &str) -> Option<&GeneratedFile> {
        self.index.get(path).map(|&slot| &self.files[slot])
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn into_files(self) -> Vec<GeneratedFile> {
        self.files
    }
}

/// Result of merging every source of one generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedProject {
    pub files: Vec<GeneratedFile>,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
    /// Deduplicated by name, first declaration kept.
    pub env: Vec<EnvVarSpec>,
}

/// Sequential merger over ordered sources. Sole writer of the path -> file map.
#[derive(Debug, Default)]
pub struct ProjectMerger {
    tree: FileTree,
    dependencies: BTreeMap<String, String>,
    dev_dependencies: BTreeMap<String, String>,
    env: Vec<EnvVarSpec>,
    env_names: HashSet<String>,
}

impl ProjectMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one source into the accumulated state.
    pub fn absorb(&mut self, source: SourceContribution) {
        let SourceContribution { label, files, dependencies, dev_dependencies, env } = source;

        for file in files {
            let path = file.path.clone();
            match self.tree.insert(file) {
                MergeOutcome::Inserted => {}
                MergeOutcome::Replaced => debug!(source = %label, %path, "replaced existing file"),
                MergeOutcome::Kept => debug!(source = %label, %path, "kept existing file"),
            }
        }

        // Later sources win per key; no range reconciliation.
        self.dependencies.extend(dependencies);
        self.dev_dependencies.extend(dev_dependencies);

        for spec in env {
            if self.env_names.insert(spec.name.clone()) {
                self.env.push(spec);
            } else {
                debug!(source = %label, name = %spec.name, "dropped duplicate env declaration");
            }
        }
    }

    pub fn finish(self) -> MergedProject {
        MergedProject {
            files: self.tree.into_files(),
            dependencies: self.dependencies,
            dev_dependencies: self.dev_dependencies,
            env: self.env,
        }
    }
}

/// Merge sources in the given order.
pub fn merge_sources<I>(sources: I) -> MergedProject
where
    I: IntoIterator<Item = SourceContribution>,
{
    let mut merger = ProjectMerger::new();
    for source in sources {
        merger.absorb(source);
    }
    merger.finish()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn source(label: &str, files: Vec<GeneratedFile>) -> SourceContribution {
        SourceContribution::with_files(label, files)
    }

    fn content_of<'a>(merged: &'a MergedProject, path: &str) -> &'a str {
        merged.files.iter().find(|f| f.path == path).map(|f| f.content.as_str()).unwrap()
    }

    #[test]
    fn first_overwrite_true_then_false_keeps_first() {
        let merged = merge_sources([
            source("a", vec![GeneratedFile::replacing("app/page.tsx", "first")]),
            source("b", vec![GeneratedFile::preserving("app/page.tsx", "second")]),
        ]);
        assert_eq!(content_of(&merged, "app/page.tsx"), "first");
    }

    #[test]
    fn first_overwrite_false_then_true_takes_second() {
        let merged = merge_sources([
            source("a", vec![GeneratedFile::preserving("app/page.tsx", "first")]),
            source("b", vec![GeneratedFile::replacing("app/page.tsx", "second")]),
        ]);
        assert_eq!(content_of(&merged, "app/page.tsx"), "second");
    }

    #[test]
    fn both_overwrite_false_keeps_first() {
        let merged = merge_sources([
            source("a", vec![GeneratedFile::preserving("app/page.tsx", "first")]),
            source("b", vec![GeneratedFile::preserving("app/page.tsx", "second")]),
        ]);
        assert_eq!(content_of(&merged, "app/page.tsx"), "first");
    }

    #[test]
    fn overwrite_wins_across_intervening_sources() {
        let merged = merge_sources([
            source("base", vec![GeneratedFile::replacing("lib/db.ts", "base")]),
            source("mid-1", vec![GeneratedFile::preserving("lib/db.ts", "mid-1")]),
            source("mid-2", vec![GeneratedFile::preserving("lib/db.ts", "mid-2")]),
            source("last", vec![GeneratedFile::replacing("lib/db.ts", "last")]),
        ]);
        assert_eq!(content_of(&merged, "lib/db.ts"), "last");
        assert_eq!(merged.files.len(), 1);
    }

    #[test]
    fn replaced_entry_keeps_first_position() {
        let merged = merge_sources([
            source(
                "base",
                vec![
                    GeneratedFile::replacing("a.ts", "a"),
                    GeneratedFile::replacing("b.ts", "b"),
                ],
            ),
            source("later", vec![GeneratedFile::replacing("a.ts", "a2")]),
        ]);
        let paths: Vec<&str> = merged.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["a.ts", "b.ts"]);
        assert_eq!(content_of(&merged, "a.ts"), "a2");
    }

    #[test]
    fn within_one_source_list_order_applies() {
        let merged = merge_sources([source(
            "a",
            vec![
                GeneratedFile::preserving("x.ts", "one"),
                GeneratedFile::preserving("x.ts", "two"),
                GeneratedFile::replacing("x.ts", "three"),
            ],
        )]);
        assert_eq!(content_of(&merged, "x.ts"), "three");
    }

    #[test]
    fn dependencies_union_with_later_value_winning() {
        let mut first = SourceContribution::new("first");
        first.dependencies.insert("a".to_string(), "1.0".to_string());
        let mut second = SourceContribution::new("second");
        second.dependencies.insert("a".to_string(), "2.0".to_string());
        second.dependencies.insert("b".to_string(), "1.0".to_string());

        let merged = merge_sources([first, second]);

        assert_eq!(
            merged.dependencies,
            BTreeMap::from([
                ("a".to_string(), "2.0".to_string()),
                ("b".to_string(), "1.0".to_string()),
            ])
        );
    }

    #[test]
    fn dev_dependencies_merge_independently() {
        let mut first = SourceContribution::new("first");
        first.dev_dependencies.insert("typescript".to_string(), "^5.0.0".to_string());
        let mut second = SourceContribution::new("second");
        second.dependencies.insert("typescript".to_string(), "^4.0.0".to_string());

        let merged = merge_sources([first, second]);

        assert_eq!(merged.dev_dependencies.get("typescript").map(String::as_str), Some("^5.0.0"));
        assert_eq!(merged.dependencies.get("typescript").map(String::as_str), Some("^4.0.0"));
    }

    #[test]
    fn env_first_declaration_wins_entirely() {
        let mut first = SourceContribution::new("first");
        first.env.push(EnvVarSpec::new("API_KEY", "first description"));
        let mut second = SourceContribution::new("second");
        let mut duplicate = EnvVarSpec::new("API_KEY", "second description");
        duplicate.required = true;
        duplicate.example = Some("abc".to_string());
        second.env.push(duplicate);
        second.env.push(EnvVarSpec::new("OTHER", "other"));

        let merged = merge_sources([first, second]);

        assert_eq!(merged.env.len(), 2);
        assert_eq!(merged.env[0].name, "API_KEY");
        assert_eq!(merged.env[0].description, "first description");
        assert!(!merged.env[0].required);
        assert!(merged.env[0].example.is_none());
        assert_eq!(merged.env[1].name, "OTHER");
    }

    // Reference model: fold the rule over a flat list of (path, overwrite, content).
    fn expected_winner(entries: &[(u8, bool, u16)], path: u8) -> Option<u16> {
        let mut winner = None;
        for &(p, overwrite, content) in entries {
            if p != path {
                continue;
            }
            if winner.is_none() || overwrite {
                winner = Some(content);
            }
        }
        winner
    }

    proptest! {
        #[test]
        fn merge_matches_overwrite_rule(
            sources in prop::collection::vec(
                prop::collection::vec((0u8..4, any::<bool>(), any::<u16>()), 0..6),
                0..6,
            )
        ) {
            let flat: Vec<(u8, bool, u16)> = sources.iter().flatten().copied().collect();
            let contributions = sources.iter().enumerate().map(|(i, files)| {
                source(
                    &format!("s{i}"),
                    files
                        .iter()
                        .map(|(p, o, c)| GeneratedFile::new(format!("f{p}"), c.to_string(), *o))
                        .collect(),
                )
            });

            let merged = merge_sources(contributions);

            let unique: HashSet<&str> = merged.files.iter().map(|f| f.path.as_str()).collect();
            prop_assert_eq!(unique.len(), merged.files.len());

            for path in 0u8..4 {
                let actual = merged
                    .files
                    .iter()
                    .find(|f| f.path == format!("f{path}"))
                    .map(|f| f.content.clone());
                let expected = expected_winner(&flat, path).map(|c| c.to_string());
                prop_assert_eq!(actual, expected);
            }
        }
    }
}
