use record_diff::split_lines;

#[test]
fn test_empty_string() {
    assert!(split_lines("").is_empty());
}

#[test]
fn test_single_newline() {
    // Only the trailing terminator is present, so there are no lines
    assert!(split_lines("\n").is_empty());
}

#[test]
fn test_single_line() {
    assert_eq!(split_lines("hello"), vec!["hello"]);
    assert_eq!(split_lines("hello\n"), vec!["hello"]);
}

#[test]
fn test_multiple_lines() {
    assert_eq!(split_lines("line1\nline2\nline3\n"), vec!["line1", "line2", "line3"]);
    assert_eq!(split_lines("line1\nline2\nline3"), vec!["line1", "line2", "line3"]);
}

#[test]
fn test_only_one_trailing_newline_is_stripped() {
    assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
    assert_eq!(split_lines(" a \n"), vec![" a "]);
}

#[test]
fn test_whitespace_only_blob() {
    assert!(split_lines("\n\n").is_empty());
    assert!(split_lines("  \t\n").is_empty());
}

#[test]
fn test_blank_lines_are_kept() {
    assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b"]);
}

#[test]
fn test_carriage_returns_are_part_of_the_line() {
    assert_eq!(split_lines("a\r\nb\r\n"), vec!["a\r", "b\r"]);
}
