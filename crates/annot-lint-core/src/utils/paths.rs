//! Path utilities for annotation identity matching.

use syn::Path;

/// Converts a syn Path to a string representation.
///
/// # Example
///
/// ```ignore
/// // For path `validators::range`
/// let s = path_to_string(&path);
/// assert_eq!(s, "validators::range");
/// ```
#[must_use]
pub fn path_to_string(path: &Path) -> String {
    path.segments
        .iter()
        .map(|seg| seg.ident.to_string())
        .collect::<Vec<_>>()
        .join("::")
}

/// Checks if a path matches a pattern.
///
/// Supports wildcards:
/// - `*` matches any single segment
/// - `**` matches any number of segments
///
/// # Examples
///
/// ```ignore
/// assert!(path_matches("validators::range", "validators::*"));
/// assert!(path_matches("validators::num::range", "validators::**"));
/// assert!(!path_matches("validators::range", "checks::*"));
/// ```
#[must_use]
pub fn path_matches(path: &str, pattern: &str) -> bool {
    let path_parts: Vec<&str> = path.split("::").collect();
    let pattern_parts: Vec<&str> = pattern.split("::").collect();

    match_parts(&path_parts, &pattern_parts)
}

fn match_parts(path: &[&str], pattern: &[&str]) -> bool {
    if pattern.is_empty() {
        return path.is_empty();
    }

    let (first_pattern, rest_pattern) = (pattern[0], &pattern[1..]);

    match first_pattern {
        "**" => {
            // Try matching zero or more segments
            for i in 0..=path.len() {
                if match_parts(&path[i..], rest_pattern) {
                    return true;
                }
            }
            false
        }
        "*" => {
            // Match exactly one segment
            if path.is_empty() {
                false
            } else {
                match_parts(&path[1..], rest_pattern)
            }
        }
        literal => {
            // Match literal segment
            if path.is_empty() || path[0] != literal {
                false
            } else {
                match_parts(&path[1..], rest_pattern)
            }
        }
    }
}

/// Extracts the last segment from a path string.
#[must_use]
pub fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_matches_literal() {
        assert!(path_matches("validators::range", "validators::range"));
        assert!(!path_matches("validators::range", "validators::length"));
    }

    #[test]
    fn test_path_matches_wildcard() {
        assert!(path_matches("validators::range", "validators::*"));
        assert!(path_matches("validators::length", "validators::*"));
        assert!(!path_matches("checks::num::range", "validators::*"));
    }

    #[test]
    fn test_path_matches_globstar() {
        assert!(path_matches("validators::range", "validators::**"));
        assert!(path_matches("validators::num::range", "validators::**"));
        assert!(path_matches("validators::num::bounds::range", "**::range"));
    }

    #[test]
    fn test_single_segment_does_not_match_qualified_pattern() {
        assert!(!path_matches("range", "validators::range"));
    }

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("validators::range"), "range");
        assert_eq!(last_segment("range"), "range");
    }
}
