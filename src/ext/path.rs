use std::path::Path;

use crate::error::{Error, Result};

/// Extension trait for Path to provide checked string conversions
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path contains invalid Unicode characters.
    ///
    /// # Examples
    /// ```
    /// use stencil::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("src/domain");
    /// assert_eq!(path.to_str_checked().unwrap(), "src/domain");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;

    /// Returns `true` when the path lies under any of the given roots (or equals one of them).
    fn is_within_any<P: AsRef<Path>>(&self, roots: &[P]) -> bool;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' contains invalid Unicode characters",
                self.display()
            ))
        })
    }

    fn is_within_any<P: AsRef<Path>>(&self, roots: &[P]) -> bool {
        roots.iter().any(|root| self.starts_with(root.as_ref()))
    }
}
