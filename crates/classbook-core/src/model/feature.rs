use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::cell::Cell;

/// Feature record - one class feature as delivered by the data repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub slug: String,
    #[serde(default)]
    pub template: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub classes: BTreeMap<String, ClassBinding>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
}

impl Feature {
    pub fn new(slug: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            template: template.into(),
            classes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_binding(mut self, class: impl Into<String>, binding: ClassBinding) -> Self {
        self.classes.insert(class.into(), binding);
        self
    }

    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }

    pub fn binding(&self, class: &str) -> Option<&ClassBinding> {
        self.classes.get(class)
    }

    /// Fragment for `class`, if this feature takes part in that class's table
    pub fn progression(&self, class: &str) -> Option<&[LevelRow]> {
        self.binding(class)?.progression.as_deref()
    }

    /// Children to describe under this feature for `class`
    ///
    /// The class binding's list wins; the feature-level list is the fallback.
    pub fn children_for(&self, class: &str) -> &[String] {
        match self.binding(class) {
            Some(binding) if !binding.children.is_empty() => &binding.children,
            _ => &self.children,
        }
    }
}

/// Per-class data attached to a feature
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassBinding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progression: Option<Vec<LevelRow>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub variables: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
}

impl ClassBinding {
    pub fn with_progression(rows: Vec<LevelRow>) -> Self {
        Self {
            progression: Some(rows),
            ..Self::default()
        }
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Levels of the fragment rows, ascending
    pub fn levels(&self) -> Vec<u32> {
        let mut levels: Vec<u32> = self
            .progression
            .iter()
            .flatten()
            .map(|row| row.level)
            .collect();
        levels.sort_unstable();
        levels
    }
}

/// One row of a progression fragment
///
/// Serialized flat: `{"Level": 3, "Feature": "Action Surge", "Uses": 1}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelRow {
    #[serde(rename = "Level")]
    pub level: u32,
    #[serde(flatten)]
    pub cells: BTreeMap<String, Cell>,
}

impl LevelRow {
    pub fn new(level: u32) -> Self {
        Self {
            level,
            cells: BTreeMap::new(),
        }
    }

    pub fn with_cell(mut self, column: impl Into<String>, cell: Cell) -> Self {
        self.cells.insert(column.into(), cell);
        self
    }
}
