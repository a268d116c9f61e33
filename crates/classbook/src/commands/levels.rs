//! Levels command - phrase a list of levels

use crate::output::print_text;
use anyhow::Result;
use classbook_core::ordinal::read_levels;

pub fn run(levels: &[u32]) -> Result<()> {
    print_text(&read_levels(levels)?)?;
    Ok(())
}
