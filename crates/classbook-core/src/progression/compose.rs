//! Composition of feature fragments into a class table

use crate::config::Config;
use crate::model::{
    Cell, Feature, Group, LevelRow, ProgressionTable, Scalar, TableRow, DEFAULT_MAX_LEVEL,
    FEATURES_COLUMN, FEATURE_COLUMN, LEVEL_COLUMN,
};
use crate::registry::FeatureRegistry;
use std::collections::BTreeMap;

use super::reconcile;

/// Table size and level shift for one composition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposeOptions {
    /// Number of rows; the table covers levels `1..=max_level`
    pub max_level: u32,
    /// Added to every fragment level, e.g. for a class taken after multiclassing
    pub level_offset: u32,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
            level_offset: 0,
        }
    }
}

impl ComposeOptions {
    pub fn with_max_level(max_level: u32) -> Self {
        Self {
            max_level,
            ..Self::default()
        }
    }
}

/// Folds fragments one at a time into a table that is frozen by [`finish`]
///
/// Fragments are applied in call order; a later fragment overwrites
/// carry-forward values of an earlier one at and above its level.
///
/// [`finish`]: ProgressionBuilder::finish
#[derive(Debug, Clone)]
pub struct ProgressionBuilder {
    options: ComposeOptions,
    rows: Vec<TableRow>,
}

impl ProgressionBuilder {
    pub fn new(options: ComposeOptions) -> Self {
        let rows = (1..=options.max_level).map(TableRow::new).collect();
        Self { options, rows }
    }

    /// Apply one feature's fragment
    ///
    /// The fragment is read in ascending level order whatever order it was
    /// given in. Rows landing outside the table after the level offset are
    /// dropped.
    pub fn apply(&mut self, slug: &str, fragment: &[LevelRow]) -> &mut Self {
        let mut sorted: Vec<&LevelRow> = fragment.iter().collect();
        sorted.sort_by_key(|row| row.level);

        for fragment_row in sorted {
            let Some(level) = self.effective_level(fragment_row.level) else {
                tracing::debug!(
                    "Dropping level {} of '{}': outside 1..={} after offset {}",
                    fragment_row.level,
                    slug,
                    self.options.max_level,
                    self.options.level_offset
                );
                continue;
            };

            for (column, cell) in &fragment_row.cells {
                if column == LEVEL_COLUMN {
                    continue;
                }
                if column == FEATURE_COLUMN || column == FEATURES_COLUMN {
                    self.append_feature(slug, column, level, cell);
                    continue;
                }
                match cell {
                    Cell::Scalar(value) => self.carry_scalar(column, level, value),
                    Cell::List(items) => self.accumulate(column, level, items),
                    Cell::Group(group) => self.carry_group(slug, column, level, group),
                }
            }
        }
        self
    }

    /// Reconcile columns and freeze the table
    pub fn finish(self) -> ProgressionTable {
        let mut rows = self.rows;
        reconcile(&mut rows);
        ProgressionTable::from_rows(rows)
    }

    fn effective_level(&self, level: u32) -> Option<u32> {
        let shifted = level.checked_add(self.options.level_offset)?;
        (1..=self.options.max_level)
            .contains(&shifted)
            .then_some(shifted)
    }

    fn row_mut(&mut self, level: u32) -> &mut TableRow {
        // rows[i] always holds level i + 1
        &mut self.rows[(level - 1) as usize]
    }

    fn append_feature(&mut self, slug: &str, column: &str, level: u32, cell: &Cell) {
        let row = self.row_mut(level);
        match cell {
            Cell::Scalar(value) => row.features.push(value.to_string()),
            Cell::List(items) => row.features.extend(items.iter().cloned()),
            Cell::Group(_) => {
                tracing::warn!(
                    "Skipping grouped '{}' cell of '{}' at level {}",
                    column,
                    slug,
                    level
                );
            }
        }
    }

    fn ensure_column(&mut self, column: &str, initial: Option<Cell>) {
        for row in &mut self.rows {
            if !row.columns.contains_key(column) {
                row.columns.insert(column.to_string(), initial.clone());
            }
        }
    }

    fn carry_scalar(&mut self, column: &str, level: u32, value: &Scalar) {
        self.ensure_column(column, None);
        for row in self.rows.iter_mut().filter(|row| row.level >= level) {
            row.columns
                .insert(column.to_string(), Some(Cell::Scalar(value.clone())));
        }
    }

    fn accumulate(&mut self, column: &str, level: u32, items: &[String]) {
        self.ensure_column(column, Some(Cell::List(Vec::new())));
        let row = self.row_mut(level);
        match row.columns.get_mut(column) {
            Some(Some(Cell::List(existing))) => existing.extend(items.iter().cloned()),
            _ => {
                row.columns
                    .insert(column.to_string(), Some(Cell::List(items.to_vec())));
            }
        }
    }

    /// Rows below `level` keep whatever they hold; grouped ones only learn the
    /// new sub-keys
    fn carry_group(&mut self, slug: &str, column: &str, level: u32, group: &Group) {
        for row in &mut self.rows {
            let slot = row.columns.entry(column.to_string()).or_insert(None);
            if row.level < level {
                if let Some(Cell::Group(existing)) = slot {
                    for key in group.keys() {
                        existing.entry(key.clone()).or_insert(None);
                    }
                }
                continue;
            }

            if !matches!(slot, Some(Cell::Group(_))) {
                if let Some(other) = slot {
                    tracing::warn!(
                        "'{}' replaces {} with a grouped value in column '{}' at level {}",
                        slug,
                        other,
                        column,
                        row.level
                    );
                }
                *slot = Some(Cell::Group(Group::new()));
            }

            if let Some(Cell::Group(existing)) = slot {
                for (key, value) in group {
                    existing.insert(key.clone(), value.clone());
                }
            }
        }
    }
}

/// Compose one class table from `features`
///
/// Features are applied in ascending slug order regardless of the order given,
/// so a later slug wins a carry-forward conflict at the same level. Features
/// without a fragment for `class` contribute nothing.
pub fn compose(class: &str, features: &[&Feature], options: ComposeOptions) -> ProgressionTable {
    let mut ordered: Vec<&Feature> = features.to_vec();
    ordered.sort_by(|a, b| a.slug.cmp(&b.slug));

    let mut builder = ProgressionBuilder::new(options);
    for feature in ordered {
        if let Some(fragment) = feature.progression(class) {
            tracing::debug!(
                "Applying '{}' ({} rows) to '{}'",
                feature.slug,
                fragment.len(),
                class
            );
            builder.apply(&feature.slug, fragment);
        }
    }
    builder.finish()
}

/// Compose the table of one class from every feature in the registry
pub fn compose_class(
    registry: &FeatureRegistry,
    class: &str,
    options: ComposeOptions,
) -> ProgressionTable {
    compose(class, &registry.class_features(class), options)
}

/// Compose a table for every class any feature is bound to
pub fn compose_all(registry: &FeatureRegistry, config: &Config) -> BTreeMap<String, ProgressionTable> {
    registry
        .classes()
        .into_iter()
        .map(|class| {
            let options = ComposeOptions::with_max_level(config.max_level(class));
            (class.to_string(), compose_class(registry, class, options))
        })
        .collect()
}
