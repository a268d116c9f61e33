//! Progression tables - composing per-feature fragments into one class table
//! and merging composed tables together
//!
//! ## Column semantics
//!
//! - `Feature` cells append to the row's `Features` list at exactly their level
//! - scalar cells carry forward: set at their level and every level above it
//! - list cells accumulate at exactly their level
//! - grouped cells carry forward per sub-key
//!
//! Every finished table has the same column set on every row, and every
//! grouped column has the same sub-key set on every row (`null` where unset).

pub mod compose;
pub mod merge;

pub use compose::{compose, compose_all, compose_class, ComposeOptions, ProgressionBuilder};
pub use merge::merge;

use crate::model::{Cell, Group, TableRow};
use std::collections::{BTreeMap, BTreeSet};

/// Backfill missing columns and grouped sub-keys with `null`
pub(crate) fn reconcile(rows: &mut [TableRow]) {
    let columns: BTreeSet<String> = rows
        .iter()
        .flat_map(|row| row.columns.keys().cloned())
        .collect();

    let mut group_keys: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for row in rows.iter() {
        for (column, value) in &row.columns {
            if let Some(Cell::Group(group)) = value {
                group_keys
                    .entry(column.clone())
                    .or_default()
                    .extend(group.keys().cloned());
            }
        }
    }

    for row in rows.iter_mut() {
        for column in &columns {
            row.columns.entry(column.clone()).or_insert(None);
        }

        for (column, keys) in &group_keys {
            let Some(value) = row.columns.get_mut(column) else {
                continue;
            };
            if value.is_none() {
                *value = Some(Cell::Group(Group::new()));
            }
            if let Some(Cell::Group(group)) = value {
                for key in keys {
                    group.entry(key.clone()).or_insert(None);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Scalar;

    #[test]
    fn test_reconcile_backfills_columns_and_sub_keys() {
        let mut first = TableRow::new(1);
        first.columns.insert("Uses".to_string(), Some(Cell::integer(1)));
        let mut slots = Group::new();
        slots.insert("1st".to_string(), Some(Scalar::Integer(2)));
        first
            .columns
            .insert("Spell Slots".to_string(), Some(Cell::Group(slots)));

        let mut second = TableRow::new(2);
        let mut slots = Group::new();
        slots.insert("2nd".to_string(), Some(Scalar::Integer(1)));
        second
            .columns
            .insert("Spell Slots".to_string(), Some(Cell::Group(slots)));

        let mut third = TableRow::new(3);
        third.columns.insert("Spell Slots".to_string(), None);

        let mut rows = vec![first, second, third];
        reconcile(&mut rows);

        for row in &rows {
            assert!(row.columns.contains_key("Uses"));
            let group = row.get("Spell Slots").and_then(Cell::as_group).unwrap();
            let keys: Vec<&str> = group.keys().map(String::as_str).collect();
            assert_eq!(keys, vec!["1st", "2nd"]);
        }
        assert_eq!(rows[1].columns["Uses"], None);
        assert_eq!(
            rows[1].get("Spell Slots").unwrap().as_group().unwrap()["1st"],
            None
        );
    }
}
