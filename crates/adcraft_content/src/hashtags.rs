//! Hashtag normalisation.

/// Normalise one hashtag: trim it and ensure a leading `#`.
///
/// Returns `None` for blank entries. Idempotent.
///
/// # Examples
///
/// ```
/// use adcraft_content::normalize_hashtag;
///
/// assert_eq!(normalize_hashtag("mugs").as_deref(), Some("#mugs"));
/// assert_eq!(normalize_hashtag("#mugs").as_deref(), Some("#mugs"));
/// assert_eq!(normalize_hashtag("  "), None);
/// ```
pub fn normalize_hashtag(tag: &str) -> Option<String> {
    let tag = tag.trim();
    if tag.trim_start_matches('#').trim().is_empty() {
        return None;
    }
    if tag.starts_with('#') {
        Some(tag.to_string())
    } else {
        Some(format!("#{}", tag))
    }
}

/// Normalise a list of hashtags, keeping order and duplicates, dropping blanks.
pub fn normalize_hashtags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .filter_map(|tag| normalize_hashtag(tag.as_ref()))
        .collect()
}
