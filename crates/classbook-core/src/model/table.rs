use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::cell::Cell;

/// One level of a composed class table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    #[serde(rename = "Level")]
    pub level: u32,
    #[serde(rename = "Features", default)]
    pub features: Vec<String>,
    #[serde(flatten)]
    pub columns: BTreeMap<String, Option<Cell>>,
}

impl TableRow {
    pub fn new(level: u32) -> Self {
        Self {
            level,
            features: Vec::new(),
            columns: BTreeMap::new(),
        }
    }

    /// Value of `column`; `None` both for null cells and absent columns
    pub fn get(&self, column: &str) -> Option<&Cell> {
        self.columns.get(column).and_then(Option::as_ref)
    }
}

/// A composed progression table, rows ordered by level
///
/// Built by [`crate::progression::ProgressionBuilder`] or
/// [`crate::progression::merge`]; read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressionTable {
    rows: Vec<TableRow>,
}

impl ProgressionTable {
    pub(crate) fn from_rows(rows: Vec<TableRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<TableRow> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, level: u32) -> Option<&TableRow> {
        self.rows.iter().find(|row| row.level == level)
    }

    /// Column names other than `Level` and `Features`
    pub fn column_names(&self) -> Vec<&str> {
        self.rows
            .first()
            .map(|row| row.columns.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Levels at which each feature is gained, in order of first appearance
    pub fn feature_levels(&self) -> Vec<(String, Vec<u32>)> {
        let mut result: Vec<(String, Vec<u32>)> = Vec::new();
        for row in &self.rows {
            for feature in &row.features {
                match result.iter_mut().find(|(name, _)| name == feature) {
                    Some((_, levels)) => levels.push(row.level),
                    None => result.push((feature.clone(), vec![row.level])),
                }
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(level: u32, features: &[&str]) -> TableRow {
        let mut row = TableRow::new(level);
        row.features = features.iter().map(|f| f.to_string()).collect();
        row
    }

    #[test]
    fn test_feature_levels_first_appearance_order() {
        let table = ProgressionTable::from_rows(vec![
            row(1, &["Second Wind", "Fighting Style"]),
            row(2, &["Action Surge"]),
            row(3, &[]),
            row(17, &["Action Surge"]),
        ]);
        assert_eq!(
            table.feature_levels(),
            vec![
                ("Second Wind".to_string(), vec![1]),
                ("Fighting Style".to_string(), vec![1]),
                ("Action Surge".to_string(), vec![2, 17]),
            ]
        );
    }

    #[test]
    fn test_row_serializes_flat() {
        let mut level_one = row(1, &["Rage"]);
        level_one
            .columns
            .insert("Rages".to_string(), Some(Cell::integer(2)));
        level_one.columns.insert("Rage Damage".to_string(), None);

        let json = serde_json::to_value(ProgressionTable::from_rows(vec![level_one])).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "Level": 1, "Features": ["Rage"], "Rage Damage": null, "Rages": 2 }
            ])
        );
    }

    #[test]
    fn test_row_deserializes_cells() {
        let json = r#"[{"Level": 3, "Spell Slots": {"1st": 4, "2nd": null}, "Die": "d8"}]"#;
        let table: ProgressionTable = serde_json::from_str(json).unwrap();
        let row = table.row(3).unwrap();

        assert!(row.features.is_empty());
        assert_eq!(row.get("Die"), Some(&Cell::text("d8")));
        let slots = row.get("Spell Slots").and_then(Cell::as_group).unwrap();
        assert_eq!(slots["2nd"], None);
        assert_eq!(table.column_names(), vec!["Die", "Spell Slots"]);
    }
}
