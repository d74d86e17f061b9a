//! Project configuration collected from the operator

use thiserror::Error;

/// Answers gathered by the prompt flow. Built once, never mutated;
/// everything downstream (artifact assembly, emission, install) reads
/// from this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Project name; also the directory created under the working directory
    pub name: String,

    /// Fastify version to pin in the generated manifest
    pub fastify_version: String,

    /// Whether to emit the ESLint config and manifest entries
    pub eslint: bool,
}

/// Why a project name was rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("project name cannot be empty")]
    Empty,

    #[error("project name cannot contain whitespace")]
    Whitespace,

    #[error("project name cannot contain path separators")]
    PathSeparator,

    #[error("project name cannot be '.' or '..'")]
    Reserved,
}

/// Validate a project name before it becomes a directory name.
pub fn validate_name(name: &str) -> Result<(), NameError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(NameError::Empty);
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(NameError::Whitespace);
    }
    if trimmed.contains(['/', '\\']) {
        return Err(NameError::PathSeparator);
    }
    // "." and ".." would resolve to the current or parent directory
    // instead of a new one under it.
    if trimmed == "." || trimmed == ".." {
        return Err(NameError::Reserved);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_names() {
        assert!(validate_name("my-app").is_ok());
        assert!(validate_name("api_v2").is_ok());
        assert!(validate_name("  padded  ").is_ok());
    }

    #[test]
    fn test_rejects_empty_names() {
        assert_eq!(validate_name(""), Err(NameError::Empty));
        assert_eq!(validate_name("   "), Err(NameError::Empty));
    }

    #[test]
    fn test_rejects_inner_whitespace() {
        assert_eq!(validate_name("my app"), Err(NameError::Whitespace));
    }

    #[test]
    fn test_rejects_dot_names() {
        assert_eq!(validate_name("."), Err(NameError::Reserved));
        assert_eq!(validate_name(".."), Err(NameError::Reserved));
        assert_eq!(validate_name(" .. "), Err(NameError::Reserved));
        // Dotfiles-style names stay valid single components
        assert!(validate_name(".internal-api").is_ok());
    }

    #[test]
    fn test_rejects_path_separators() {
        assert_eq!(validate_name("apps/my-app"), Err(NameError::PathSeparator));
        assert_eq!(validate_name("apps\\my-app"), Err(NameError::PathSeparator));
    }
}
