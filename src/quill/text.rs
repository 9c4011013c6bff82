/// Replaces the two-character sequences `\n` and `\t` with a newline and a tab.
///
/// Lets shell users pass separators such as `--delimiter '\n\n'` without
/// quoting tricks.
pub fn expand_whitespace_literals(input: &str) -> String {
    input.replace("\\n", "\n").replace("\\t", "\t")
}

/// `count` followed by `singular` or `plural`, e.g. "1 alias", "3 aliases".
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}
