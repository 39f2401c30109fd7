pub const PREVIEW_CHARS: usize = 200;

/// Replaces the first occurrence of `search` in `content`.
/// Returns `false` and leaves `content` untouched when there is no match.
pub fn replace_first(content: &mut String, search: &str, replace: &str) -> bool {
    if search.is_empty() {
        return false;
    }
    match content.find(search) {
        Some(start) => {
            content.replace_range(start..start + search.len(), replace);
            true
        }
        None => false,
    }
}

/// First `PREVIEW_CHARS` characters of `text`, cut on a char boundary.
pub fn preview(text: &str) -> &str {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_first_only() {
        let mut content = "ref(false)\nref(false)\n".to_string();
        assert!(replace_first(&mut content, "ref(false)", "ref(true)"));
        assert_eq!(content, "ref(true)\nref(false)\n");
    }

    #[test]
    fn test_replace_missing_is_noop() {
        let mut content = "function closeModals()".to_string();
        assert!(!replace_first(&mut content, "function closeSkaterModal()", "x"));
        assert_eq!(content, "function closeModals()");
    }

    #[test]
    fn test_replace_is_whitespace_sensitive() {
        let mut content = "  <h2>Add New Player</h2>".to_string();
        assert!(!replace_first(&mut content, "    <h2>Add New Player</h2>", "x"));
        assert!(replace_first(&mut content, "<h2>Add New Player</h2>", "<h2>x</h2>"));
        assert_eq!(content, "  <h2>x</h2>");
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let short = "import NamePicker";
        assert_eq!(preview(short), short);

        let long = "é".repeat(PREVIEW_CHARS + 10);
        let cut = preview(&long);
        assert_eq!(cut.chars().count(), PREVIEW_CHARS);
        assert!(long.starts_with(cut));
    }
}
