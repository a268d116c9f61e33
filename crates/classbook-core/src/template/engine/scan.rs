//! Tag discovery
//!
//! Equivalent to the pattern ``` `\{\( .+? \)\}` ```: the leftmost opener
//! whose line holds a closer at least one character after it.

/// Opening delimiter, including the separating space
pub(crate) const OPEN: &str = "`{( ";

/// Closing delimiter, including the separating space
pub(crate) const CLOSE: &str = " )}`";

/// A tag found in the text
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Tag {
    /// Tag name between the delimiters
    pub name: String,
    /// Byte position of the opening backtick
    pub start: usize,
    /// Byte position just past the closing backtick
    pub end: usize,
}

/// Find the first tag starting at or after byte offset `from`
pub(crate) fn find_tag(text: &str, from: usize) -> Option<Tag> {
    let mut search = from;

    while let Some(offset) = text[search..].find(OPEN) {
        let start = search + offset;
        let name_start = start + OPEN.len();
        let line_end = text[name_start..]
            .find('\n')
            .map_or(text.len(), |i| name_start + i);
        let line = &text[name_start..line_end];

        // The name needs at least one character before the closer
        if let Some(first) = line.chars().next() {
            let skip = first.len_utf8();
            if let Some(close) = line[skip..].find(CLOSE) {
                let name_end = name_start + skip + close;
                return Some(Tag {
                    name: text[name_start..name_end].to_string(),
                    start,
                    end: name_end + CLOSE.len(),
                });
            }
        }

        // Backtick is one byte; retry from the next position
        search = start + 1;
    }

    None
}

/// 1-based line number of byte offset `pos`
pub(crate) fn line_of(text: &str, pos: usize) -> usize {
    text[..pos].matches('\n').count() + 1
}
