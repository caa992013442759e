/// A trait to shorten text for narrow output such as table cells.
pub trait TruncateChars {
    /// Returns the first `limit` characters followed by `...` if `self` is longer than `limit` characters,
    /// otherwise returns `self` unchanged. Counts Unicode scalar values, not bytes or words.
    fn truncate_with_ellipsis(&self, limit: usize) -> String;
}

impl TruncateChars for str {
    fn truncate_with_ellipsis(&self, limit: usize) -> String {
        match self.char_indices().nth(limit) {
            Some((end, _)) => format!("{}...", &self[..end]),
            None => self.to_string(),
        }
    }
}
