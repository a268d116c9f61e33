//! Line removal for exhausted level tags

/// Remove the whole line holding the span `start..end`
///
/// The line's own newlines are dropped. When there is text on both sides of
/// the removed line, a single `\n` joins them; at the start or end of the text
/// nothing is left behind.
///
/// Returns the edited text and the byte offset right after the join point.
pub(super) fn delete_line(text: &str, start: usize, end: usize) -> (String, usize) {
    let left = &text[..start];
    let right = &text[end..];

    let (kept_left, left_newline) = match left.rfind('\n') {
        Some(i) => (&left[..i], true),
        None => ("", false),
    };
    let (kept_right, right_newline) = match right.find('\n') {
        Some(i) => (&right[i + 1..], true),
        None => ("", false),
    };

    let join = if left_newline && right_newline { "\n" } else { "" };

    let mut edited = String::with_capacity(kept_left.len() + join.len() + kept_right.len());
    edited.push_str(kept_left);
    edited.push_str(join);
    edited.push_str(kept_right);
    (edited, kept_left.len() + join.len())
}
