//! Merging composed tables, e.g. the classes of one multiclass character

use crate::error::{ClassbookError, Result};
use crate::model::{Cell, Group, ProgressionTable, Scalar, TableRow};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use super::reconcile;

/// Merge tables level by level into one table
///
/// Callers shift or truncate level ranges beforehand; rows with the same
/// level are combined:
///
/// - `Features` and other list columns are appended
/// - numeric sub-values of grouped columns are added together
/// - a `null` on either side yields the other value
/// - anything else must be equal
///
/// # Errors
///
/// Returns [`ClassbookError::Collision`] when two tables disagree on a cell and
/// [`ClassbookError::Overflow`] when grouped integers do not fit in an `i64`.
pub fn merge<'a>(tables: impl IntoIterator<Item = &'a ProgressionTable>) -> Result<ProgressionTable> {
    let mut merged: BTreeMap<u32, TableRow> = BTreeMap::new();

    for table in tables {
        for row in table.rows() {
            match merged.entry(row.level) {
                Entry::Vacant(slot) => {
                    slot.insert(row.clone());
                }
                Entry::Occupied(mut slot) => merge_row(slot.get_mut(), row)?,
            }
        }
    }

    let mut rows: Vec<TableRow> = merged.into_values().collect();
    reconcile(&mut rows);
    tracing::debug!("Merged table has {} rows", rows.len());
    Ok(ProgressionTable::from_rows(rows))
}

fn merge_row(existing: &mut TableRow, incoming: &TableRow) -> Result<()> {
    existing.features.extend(incoming.features.iter().cloned());

    for (column, value) in &incoming.columns {
        match existing.columns.get_mut(column) {
            None => {
                existing.columns.insert(column.clone(), value.clone());
            }
            Some(current) => merge_value(column, existing.level, current, value)?,
        }
    }
    Ok(())
}

fn merge_value(
    column: &str,
    level: u32,
    current: &mut Option<Cell>,
    incoming: &Option<Cell>,
) -> Result<()> {
    let Some(incoming) = incoming else {
        return Ok(());
    };

    match current {
        None => *current = Some(incoming.clone()),
        Some(existing) => merge_cells(column, level, existing, incoming)?,
    }
    Ok(())
}

fn merge_cells(column: &str, level: u32, existing: &mut Cell, incoming: &Cell) -> Result<()> {
    match (existing, incoming) {
        (Cell::List(items), Cell::List(more)) => items.extend(more.iter().cloned()),
        (Cell::Group(group), Cell::Group(more)) => merge_group(column, level, group, more)?,
        (existing, incoming) if *existing == *incoming => {}
        (existing, incoming) => {
            return Err(ClassbookError::Collision {
                column: column.to_string(),
                level,
                existing: existing.to_string(),
                incoming: incoming.to_string(),
            });
        }
    }
    Ok(())
}

fn merge_group(column: &str, level: u32, group: &mut Group, incoming: &Group) -> Result<()> {
    for (key, value) in incoming {
        let Some(value) = value else {
            group.entry(key.clone()).or_insert(None);
            continue;
        };

        let slot = group.entry(key.clone()).or_insert(None);
        match slot {
            None => *slot = Some(value.clone()),
            Some(current) => match current.checked_add(value) {
                Some(sum) => *current = sum,
                None if matches!((&*current, value), (Scalar::Integer(_), Scalar::Integer(_))) => {
                    return Err(ClassbookError::Overflow {
                        column: format!("{}.{}", column, key),
                        level,
                        existing: current.to_string(),
                        incoming: value.to_string(),
                    });
                }
                None if current != value => {
                    return Err(ClassbookError::Collision {
                        column: format!("{}.{}", column, key),
                        level,
                        existing: current.to_string(),
                        incoming: value.to_string(),
                    });
                }
                None => {}
            },
        }
    }
    Ok(())
}
