/// Returns at most `max_chars` characters of `s`, never splitting a UTF-8 sequence
///
/// # Examples
///
/// ```
/// use package_indexer::utils::truncate_chars;
///
/// assert_eq!(truncate_chars("Hello, world", 5), "Hello");
/// assert_eq!(truncate_chars("héllo", 2), "hé");
/// assert_eq!(truncate_chars("short", 80), "short");
/// ```
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}
