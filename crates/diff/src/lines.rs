/// Split a snapshot into lines
///
/// One trailing `\n` is dropped before splitting, so `"a\nb\n"` and `"a\nb"`
/// both give `["a", "b"]`. A blob that is empty or holds only whitespace
/// gives no lines at all. Any `\r` is kept as part of its line.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let text = text.strip_suffix('\n').unwrap_or(text);
    text.split('\n').collect()
}
