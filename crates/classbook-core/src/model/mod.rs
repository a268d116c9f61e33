//! Data model shared by the composer, the merger and the tag engine

pub mod cell;
pub mod feature;
pub mod table;

pub use cell::{Cell, Group, Scalar};
pub use feature::{ClassBinding, Feature, LevelRow};
pub use table::{ProgressionTable, TableRow};

/// Fragment column holding the row's level; never copied into a table
pub const LEVEL_COLUMN: &str = "Level";

/// Fragment column whose values feed the table's `Features` list
pub const FEATURE_COLUMN: &str = "Feature";

/// Table field listing the features gained at a row; a fragment cell with this
/// name is folded into it like `Feature`
pub const FEATURES_COLUMN: &str = "Features";

/// Default number of rows in a class table
pub const DEFAULT_MAX_LEVEL: u32 = 20;
