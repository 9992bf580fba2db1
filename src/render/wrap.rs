//! Greedy word wrap against a pixel budget.
//!
//! The same routine serves domain header names, bullet content lines, and
//! legend labels; the caller supplies the measuring function so behavior is
//! identical at every call site.

/// Wraps `text` into lines no wider than `max_width` pixels.
///
/// Greedy line fill: the first word starts the line; each following word is
/// tentatively appended with a single space and kept if the measured width
/// stays within budget, otherwise the line is closed and the word starts a
/// new one. The final line is always flushed. A single word wider than the
/// budget is emitted unsplit as its own overflowing line.
///
/// Whitespace-only input produces no lines.
pub fn wrap_to_width<F>(text: &str, max_width: f32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    let mut current = first.to_string();
    for word in words {
        let candidate = format!("{current} {word}");
        if measure(&candidate) <= max_width {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    lines.push(current);
    lines
}
