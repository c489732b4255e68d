use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating display names of vault files.
    /// Rejects path separators, NUL bytes and other control characters so a
    /// display name can never be smuggled into an object key.
    /// - Valid: "Financial_Report_2024.pdf", "notes.txt", "archive.tar.gz"
    /// - Invalid: "../etc/passwd", "a/b.txt", "a\\b.txt", ""
    pub static ref FILE_NAME_REGEX: Regex = Regex::new(r"^[^/\\\x00-\x1f]{1,255}$").unwrap();
}

/// Check a user-supplied file name against [`FILE_NAME_REGEX`].
pub fn is_valid_file_name(name: &str) -> bool {
    FILE_NAME_REGEX.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_regex_valid() {
        assert!(is_valid_file_name("Financial_Report_2024.pdf"));
        assert!(is_valid_file_name("notes.txt"));
        assert!(is_valid_file_name("archive.tar.gz"));
        assert!(is_valid_file_name("no extension"));
        assert!(is_valid_file_name("café menu.pdf"));
    }

    #[test]
    fn test_file_name_regex_invalid() {
        assert!(!is_valid_file_name("")); // empty
        assert!(!is_valid_file_name("../etc/passwd")); // path traversal
        assert!(!is_valid_file_name("a/b.txt")); // separator
        assert!(!is_valid_file_name("a\\b.txt")); // backslash
        assert!(!is_valid_file_name("bad\x00name")); // NUL byte
        assert!(!is_valid_file_name(&"x".repeat(256))); // too long
    }
}
