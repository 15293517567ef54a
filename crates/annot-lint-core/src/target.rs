//! Target annotation identity and match policy.

use serde::{Deserialize, Serialize};

use crate::symbol::Annotation;
use crate::utils::paths;

/// How annotation identity is compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Compare the simple name of the resolved identity (its last
    /// segment). An alias at the use site still matches. Permissive:
    /// unrelated annotations whose resolved paths share the name all
    /// match.
    #[default]
    Name,
    /// Compare the import-resolved path against the target path,
    /// segment by segment. `*` matches one segment, `**` any number.
    Path,
}

/// The annotation identity a scan searches for.
///
/// Callers state both the identity and the comparison policy up front;
/// the scanner applies whatever it is given and has no default of its
/// own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationTarget {
    path: String,
    policy: MatchPolicy,
}

impl AnnotationTarget {
    /// Creates a target.
    ///
    /// `path` may be a bare name (`range`) or a qualified path
    /// (`validators::range`). Wildcards are meaningful only under
    /// [`MatchPolicy::Path`].
    ///
    /// # Errors
    ///
    /// Returns error if the path is empty.
    pub fn new(path: &str, policy: MatchPolicy) -> Result<Self, TargetError> {
        if path.is_empty() {
            return Err(TargetError::EmptyPath);
        }
        Ok(Self {
            path: path.to_string(),
            policy,
        })
    }

    /// Returns the target path as written.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the comparison policy.
    #[must_use]
    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Simple name of the target: the last path segment. Used as the
    /// second message argument of findings.
    #[must_use]
    pub fn name(&self) -> &str {
        paths::last_segment(&self.path)
    }

    /// Tests whether `annotation` carries this identity.
    #[must_use]
    pub fn matches(&self, annotation: &Annotation) -> bool {
        match self.policy {
            MatchPolicy::Name => annotation.name() == self.name(),
            MatchPolicy::Path => paths::path_matches(&annotation.resolved, &self.path),
        }
    }
}

impl std::fmt::Display for AnnotationTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)
    }
}

/// Errors in target construction.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TargetError {
    /// The target path was empty.
    #[error("annotation target path must not be empty")]
    EmptyPath,
}
