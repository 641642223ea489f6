//! Validation functions for dotted paths.

use crate::types::Segment;
use crate::PathError;

/// Maximum allowed path depth.
pub const MAX_PATH_LENGTH: usize = 256;

/// Validate a parsed path.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no segments
/// - The path exceeds the maximum depth (256 segments)
///
/// # Example
///
/// ```
/// use genesis_path::{validate_path, Segment};
///
/// validate_path(&[Segment::Key("app_state".to_string())]).unwrap();
/// validate_path(&[]).unwrap_err();
/// ```
pub fn validate_path(path: &[Segment]) -> Result<(), PathError> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }
    if path.len() > MAX_PATH_LENGTH {
        return Err(PathError::TooLong);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(n: usize) -> Vec<Segment> {
        (0..n).map(|i| Segment::Key(format!("k{i}"))).collect()
    }

    #[test]
    fn test_validate_empty_path() {
        assert_eq!(validate_path(&[]), Err(PathError::Empty));
    }

    #[test]
    fn test_validate_short_path() {
        assert!(validate_path(&keys(2)).is_ok());
    }

    #[test]
    fn test_validate_long_path() {
        assert_eq!(validate_path(&keys(300)), Err(PathError::TooLong));
    }

    #[test]
    fn test_validate_max_length_path() {
        assert!(validate_path(&keys(MAX_PATH_LENGTH)).is_ok());
    }
}
