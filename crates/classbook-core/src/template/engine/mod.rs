//! Tag substitution engine implementation

mod lines;
mod scan;

use crate::model::{ClassBinding, Feature};
use crate::ordinal::read_levels;
use crate::template::error::TemplateError;
use std::collections::BTreeMap;

use lines::delete_line;
use scan::{find_tag, line_of, Tag};

/// Everything a template can refer to for one (feature, class) pair
#[derive(Debug, Clone, Default)]
pub struct TagContext {
    class_name: String,
    levels: Vec<u32>,
    variables: BTreeMap<String, String>,
}

impl TagContext {
    /// Context with a class name and no levels or variables
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            ..Self::default()
        }
    }

    /// Context for a class binding: its fragment levels and its variables
    pub fn from_binding(class_name: impl Into<String>, binding: &ClassBinding) -> Self {
        Self {
            class_name: class_name.into(),
            levels: binding.levels(),
            variables: binding.variables.clone(),
        }
    }

    /// Context for `feature` under `class`; a missing binding is an empty one
    pub fn for_feature(class_name: impl Into<String>, feature: &Feature, class: &str) -> Self {
        match feature.binding(class) {
            Some(binding) => Self::from_binding(class_name, binding),
            None => Self::new(class_name),
        }
    }

    /// Replace the level list; it is sorted ascending
    pub fn with_levels(mut self, levels: impl IntoIterator<Item = u32>) -> Self {
        self.levels = levels.into_iter().collect();
        self.levels.sort_unstable();
        self
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn levels(&self) -> &[u32] {
        &self.levels
    }
}

/// Visit state shared by `level` and `end-levels` within one substitution
#[derive(Debug, Default)]
struct LevelCursor {
    visited: usize,
    exhausted: bool,
}

impl LevelCursor {
    /// Consume the next unvisited level
    fn next(&mut self, levels: &[u32]) -> Option<u32> {
        if self.exhausted {
            return None;
        }
        let level = levels.get(self.visited).copied();
        self.visited += 1;
        level
    }

    /// Consume every remaining level
    fn rest<'a>(&mut self, levels: &'a [u32]) -> &'a [u32] {
        if self.exhausted {
            return &[];
        }
        self.exhausted = true;
        &levels[self.visited.min(levels.len())..]
    }
}

/// What a tag turns into
enum Resolution {
    Replace(String),
    DeleteLine,
}

/// Tag substitution engine for description templates
pub struct TagEngine;

impl TagEngine {
    /// Create a new tag engine
    pub fn new() -> Self {
        Self
    }

    /// Substitute every tag in `template`
    ///
    /// Tags are resolved left to right. Scanning resumes right after each
    /// replacement, so substituted text is never scanned again.
    ///
    /// # Errors
    ///
    /// - [`TemplateError::MalformedTag`] for an unknown tag name
    /// - [`TemplateError::InvalidInput`] for `all-levels` over an empty level list
    pub fn substitute(&self, template: &str, context: &TagContext) -> Result<String, TemplateError> {
        let mut text = template.to_string();
        let mut cursor = 0;
        let mut levels = LevelCursor::default();

        while let Some(tag) = find_tag(&text, cursor) {
            let resolution = self.resolve(&tag, &text, context, &mut levels)?;
            let (edited, next) = match resolution {
                Resolution::Replace(replacement) => {
                    let next = tag.start + replacement.len();
                    let mut edited = String::with_capacity(text.len() + replacement.len());
                    edited.push_str(&text[..tag.start]);
                    edited.push_str(&replacement);
                    edited.push_str(&text[tag.end..]);
                    (edited, next)
                }
                Resolution::DeleteLine => delete_line(&text, tag.start, tag.end),
            };
            text = edited;
            cursor = next;
        }

        Ok(text)
    }

    fn resolve(
        &self,
        tag: &Tag,
        text: &str,
        context: &TagContext,
        levels: &mut LevelCursor,
    ) -> Result<Resolution, TemplateError> {
        match tag.name.as_str() {
            "class" => Ok(Resolution::Replace(context.class_name.clone())),
            "level" => match levels.next(&context.levels) {
                Some(level) => Ok(Resolution::Replace(read_levels(&[level])?)),
                None => Ok(Resolution::DeleteLine),
            },
            "end-levels" => {
                let rest = levels.rest(&context.levels);
                if rest.is_empty() {
                    Ok(Resolution::DeleteLine)
                } else {
                    Ok(Resolution::Replace(read_levels(rest)?))
                }
            }
            "all-levels" | "levels" => Ok(Resolution::Replace(read_levels(&context.levels)?)),
            name => match context.variables.get(name) {
                Some(value) => Ok(Resolution::Replace(value.clone())),
                None => Err(TemplateError::MalformedTag {
                    tag: name.to_string(),
                    line: line_of(text, tag.start),
                }),
            },
        }
    }
}

impl Default for TagEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to substitute a template
pub fn substitute(template: &str, context: &TagContext) -> Result<String, TemplateError> {
    TagEngine::new().substitute(template, context)
}

#[cfg(test)]
mod tests;
