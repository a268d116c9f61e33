//! Description assembly - a feature's text followed by its children's
//!
//! Each child's text is substituted with the child's own binding for the
//! class, then its headings are pushed one level down so the child reads as a
//! subsection of its parent. Children follow their declared order.

use crate::config::Config;
use crate::error::{ClassbookError, Result};
use crate::model::Feature;
use crate::registry::FeatureRegistry;
use crate::template::{TagContext, TagEngine};
use std::collections::BTreeMap;

/// Deepest markdown heading level
const MAX_HEADING_DEPTH: usize = 6;

/// Assembles descriptions for one class
pub struct Describer<'a> {
    registry: &'a FeatureRegistry,
    class: &'a str,
    class_name: &'a str,
    engine: TagEngine,
}

impl<'a> Describer<'a> {
    /// `class_name` is what the `class` tag turns into
    pub fn new(registry: &'a FeatureRegistry, class: &'a str, class_name: &'a str) -> Self {
        Self {
            registry,
            class,
            class_name,
            engine: TagEngine::new(),
        }
    }

    /// Describe `feature` and, recursively, its children
    ///
    /// # Errors
    ///
    /// - [`ClassbookError::UnknownReference`] if a child slug is not registered
    /// - [`ClassbookError::CyclicReference`] if a feature is its own descendant
    /// - tag errors from substitution
    pub fn describe(&self, feature: &Feature) -> Result<String> {
        let mut path = Vec::new();
        self.describe_at(feature, &mut path)
    }

    fn describe_at(&self, feature: &Feature, path: &mut Vec<String>) -> Result<String> {
        if path.contains(&feature.slug) {
            return Err(ClassbookError::CyclicReference(feature.slug.clone()));
        }
        path.push(feature.slug.clone());

        let context = TagContext::for_feature(self.class_name, feature, self.class);
        let mut text = self.engine.substitute(&feature.template, &context)?;

        for child_slug in feature.children_for(self.class) {
            let child = self
                .registry
                .get(child_slug)
                .ok_or_else(|| ClassbookError::UnknownReference {
                    parent: feature.slug.clone(),
                    child: child_slug.clone(),
                })?;

            let addon = demote_headings(&self.describe_at(child, path)?);
            if !addon.is_empty() {
                text.push('\n');
                text.push_str(&addon);
            }
        }

        path.pop();
        Ok(text)
    }
}

/// Describe one feature for `class`
pub fn describe(
    registry: &FeatureRegistry,
    feature: &Feature,
    class: &str,
    class_name: &str,
) -> Result<String> {
    Describer::new(registry, class, class_name).describe(feature)
}

/// Describe every feature bound to `class`, keyed by slug
pub fn describe_class(
    registry: &FeatureRegistry,
    class: &str,
    config: &Config,
) -> Result<BTreeMap<String, String>> {
    let describer = Describer::new(registry, class, config.display_name(class));
    registry
        .bound_to(class)
        .map(|feature| {
            tracing::debug!("Describing '{}' for '{}'", feature.slug, class);
            Ok((feature.slug.clone(), describer.describe(feature)?))
        })
        .collect()
}

/// Push every markdown heading down one level (`# ` → `## `)
///
/// Headings already at the deepest level stay where they are.
pub fn demote_headings(text: &str) -> String {
    let mut demoted = String::with_capacity(text.len() + 8);
    for line in text.split_inclusive('\n') {
        let depth = line.bytes().take_while(|&b| b == b'#').count();
        if depth > 0 && depth < MAX_HEADING_DEPTH && line[depth..].starts_with(' ') {
            demoted.push('#');
        }
        demoted.push_str(line);
    }
    demoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cell, ClassBinding, LevelRow};

    fn registry(features: Vec<Feature>) -> FeatureRegistry {
        FeatureRegistry::new(features).unwrap()
    }

    #[test]
    fn test_demote_headings() {
        assert_eq!(demote_headings("# Title\ntext\n"), "## Title\ntext\n");
        assert_eq!(demote_headings("### Deep\n"), "#### Deep\n");
        assert_eq!(demote_headings("###### Floor"), "###### Floor");
        assert_eq!(demote_headings("#hashtag"), "#hashtag");
        assert_eq!(demote_headings("no heading # here"), "no heading # here");
    }

    #[test]
    fn test_describe_without_children() {
        let feature = Feature::new("second-wind", "# Second Wind\nRegain `{( die )}`.")
            .with_binding("fighter", ClassBinding::default().with_variable("die", "1d10"));
        let registry = registry(vec![feature.clone()]);
        let text = describe(&registry, &feature, "fighter", "Fighter").unwrap();
        assert_eq!(text, "# Second Wind\nRegain 1d10.");
    }

    #[test]
    fn test_children_in_declared_order() {
        let parent = Feature::new("fighting-style", "# Fighting Style").with_binding(
            "fighter",
            ClassBinding {
                progression: Some(vec![
                    LevelRow::new(1).with_cell("Feature", Cell::text("Fighting Style"))
                ]),
                children: vec!["protection".to_string(), "archery".to_string()],
                ..ClassBinding::default()
            },
        );
        let archery = Feature::new("archery", "# Archery\n+2 to ranged attacks.");
        let protection = Feature::new("protection", "# Protection\nImpose disadvantage.");
        let registry = registry(vec![parent.clone(), archery, protection]);

        let text = describe(&registry, &parent, "fighter", "Fighter").unwrap();
        assert_eq!(
            text,
            "# Fighting Style\n## Protection\nImpose disadvantage.\n## Archery\n+2 to ranged attacks."
        );
    }

    #[test]
    fn test_grandchildren_demoted_twice() {
        let root = Feature::new("root", "# Root").with_children(["child"]);
        let child = Feature::new("child", "# Child").with_children(["grandchild"]);
        let grandchild = Feature::new("grandchild", "# Grandchild");
        let registry = registry(vec![root.clone(), child, grandchild]);

        let text = describe(&registry, &root, "fighter", "Fighter").unwrap();
        assert_eq!(text, "# Root\n## Child\n### Grandchild");
    }

    #[test]
    fn test_child_uses_own_binding() {
        let parent = Feature::new("maneuvers", "# Maneuvers `{( level )}`").with_binding(
            "fighter",
            ClassBinding {
                progression: Some(vec![LevelRow::new(3)]),
                children: vec!["parry".to_string()],
                ..ClassBinding::default()
            },
        );
        let parry = Feature::new("parry", "# Parry\nReduce damage by `{( amount )}`.")
            .with_binding("fighter", ClassBinding::default().with_variable("amount", "1d8"));
        let registry = registry(vec![parent.clone(), parry]);

        let text = describe(&registry, &parent, "fighter", "Fighter").unwrap();
        assert_eq!(
            text,
            "# Maneuvers 3rd level\n## Parry\nReduce damage by 1d8."
        );
    }

    #[test]
    fn test_empty_child_text_skipped() {
        let root = Feature::new("root", "Root").with_children(["blank"]);
        let blank = Feature::new("blank", "");
        let registry = registry(vec![root.clone(), blank]);
        assert_eq!(
            describe(&registry, &root, "fighter", "Fighter").unwrap(),
            "Root"
        );
    }

    #[test]
    fn test_unknown_child() {
        let root = Feature::new("root", "Root").with_children(["missing"]);
        let registry = registry(vec![root.clone()]);
        match describe(&registry, &root, "fighter", "Fighter") {
            Err(ClassbookError::UnknownReference { parent, child }) => {
                assert_eq!(parent, "root");
                assert_eq!(child, "missing");
            }
            other => panic!("Expected UnknownReference, got {:?}", other),
        }
    }

    #[test]
    fn test_cycle_detected() {
        let a = Feature::new("a", "A").with_children(["b"]);
        let b = Feature::new("b", "B").with_children(["a"]);
        let registry = registry(vec![a.clone(), b]);
        match describe(&registry, &a, "fighter", "Fighter") {
            Err(ClassbookError::CyclicReference(slug)) => assert_eq!(slug, "a"),
            other => panic!("Expected CyclicReference, got {:?}", other),
        }
    }

    #[test]
    fn test_repeated_sibling_is_not_a_cycle() {
        let root = Feature::new("root", "Root").with_children(["leaf", "leaf"]);
        let leaf = Feature::new("leaf", "Leaf");
        let registry = registry(vec![root.clone(), leaf]);
        assert_eq!(
            describe(&registry, &root, "fighter", "Fighter").unwrap(),
            "Root\nLeaf\nLeaf"
        );
    }

    #[test]
    fn test_malformed_tag_surfaces() {
        let feature = Feature::new("bad", "`{( nope )}`");
        let registry = registry(vec![feature.clone()]);
        match describe(&registry, &feature, "fighter", "Fighter") {
            Err(ClassbookError::MalformedTag { tag, .. }) => assert_eq!(tag, "nope"),
            other => panic!("Expected MalformedTag, got {:?}", other),
        }
    }

    #[test]
    fn test_describe_class_uses_display_name() {
        let config = Config::from_toml("[classes.fighter]\nname = \"Fighter\"").unwrap();
        let registry = registry(vec![
            Feature::new("a", "As a `{( class )}`")
                .with_binding("fighter", ClassBinding::default()),
            Feature::new("b", "Wizard only").with_binding("wizard", ClassBinding::default()),
        ]);
        let descriptions = describe_class(&registry, "fighter", &config).unwrap();
        assert_eq!(descriptions.len(), 1);
        assert_eq!(descriptions["a"], "As a Fighter");
    }
}
