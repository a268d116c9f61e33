//! Shared test helpers for tag engine tests

use crate::model::{Cell, ClassBinding, LevelRow};
use crate::template::engine::TagContext;

/// Fighter context with variables and no levels
pub(super) fn fighter_context() -> TagContext {
    TagContext::new("fighter")
        .with_variable("die", "d10")
        .with_variable("uses", "once")
}

/// Context whose fragment has rows at `levels`
pub(super) fn leveled_context(levels: &[u32]) -> TagContext {
    let rows = levels
        .iter()
        .map(|&level| LevelRow::new(level).with_cell("Feature", Cell::text("Indomitable")))
        .collect();
    TagContext::from_binding("fighter", &ClassBinding::with_progression(rows))
}
