//! Context for resolving symbols within a single file.

use std::path::{Path, PathBuf};

/// Metadata about the file a scan pass is working on.
///
/// Resolvers use the content to translate line/column positions from
/// spans into byte offsets for reporting.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Path relative to the project root.
    pub relative_path: PathBuf,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);

        Self {
            path,
            content,
            relative_path,
        }
    }

    /// Calculates byte offset for a given line and column.
    ///
    /// # Arguments
    ///
    /// * `line` - 1-indexed line number
    /// * `column` - 1-indexed column number
    ///
    /// # Returns
    ///
    /// Byte offset from the start of the file, or 0 if out of bounds.
    #[must_use]
    pub fn offset_for(&self, line: usize, column: usize) -> usize {
        if line == 0 {
            return 0;
        }

        let mut offset = 0;
        for (i, line_content) in self.content.lines().enumerate() {
            if i + 1 == line {
                return offset + column.saturating_sub(1);
            }
            offset += line_content.len() + 1; // +1 for newline
        }

        offset
    }
}
