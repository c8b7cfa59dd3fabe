//! The fixed list of pages downloaded by every strategy

/// Pages downloaded by default, in report order
pub const DEFAULT_SITES: &[&str] = &[
    "https://www.google.com",
    "https://www.microsoft.com",
    "https://www.cnn.com",
    "https://www.codeproject.com",
    "https://www.stackoverflow.com",
];

/// Fresh owned copy of [`DEFAULT_SITES`]
pub fn default_sites() -> Vec<String> {
    DEFAULT_SITES.iter().map(|s| s.to_string()).collect()
}
