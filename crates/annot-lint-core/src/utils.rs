//! Utility functions shared by the resolver and target matching.

pub mod imports;
pub mod paths;

// Re-export commonly used utilities
#[doc(inline)]
pub use imports::ImportMap;
#[doc(inline)]
pub use paths::path_to_string;
