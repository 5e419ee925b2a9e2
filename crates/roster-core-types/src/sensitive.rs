//! Personal-data marker for automatic redaction
//!
//! The `Sensitive<T>` wrapper keeps personal data (email addresses, and
//! anything else identifying a student or instructor beyond their id) out of
//! log output and debug dumps.

use serde::{Serialize, Serializer};
use std::fmt;

const REDACTED: &str = "***REDACTED***";

/// Wrapper for personal data that redacts itself in Debug, Display and Serialize
///
/// # Example
///
/// ```
/// use roster_core_types::Sensitive;
///
/// let email = Sensitive::new("ada@example.org");
/// println!("{:?}", email); // Prints: ***REDACTED***
/// println!("{}", email);   // Prints: ***REDACTED***
///
/// // Access the actual value when needed
/// assert_eq!(email.expose(), &"ada@example.org");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Wrap a sensitive value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying value
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consume the wrapper and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T> Serialize for Sensitive<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(REDACTED)
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensitive_debug_redaction() {
        let email = Sensitive::new("grace@navy.mil");
        let debug_str = format!("{:?}", email);
        assert_eq!(debug_str, "***REDACTED***");
        assert!(!debug_str.contains("grace"));
    }

    #[test]
    fn test_sensitive_display_redaction() {
        let email = Sensitive::new("alan@bletchley.uk");
        let display_str = format!("{}", email);
        assert_eq!(display_str, "***REDACTED***");
        assert!(!display_str.contains("bletchley"));
    }

    #[test]
    fn test_sensitive_serialize_redaction() {
        let email = Sensitive::new("ada@example.org".to_string());
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"***REDACTED***\"");
    }

    #[test]
    fn test_sensitive_expose_and_into_inner() {
        let email = Sensitive::new(String::from("ada@example.org"));
        assert_eq!(email.expose(), "ada@example.org");
        let cloned = email.clone();
        assert_eq!(cloned.into_inner(), "ada@example.org");
    }

    #[test]
    fn test_sensitive_inside_struct() {
        #[derive(Debug)]
        #[allow(dead_code)]
        struct Contact {
            student_id: String,
            email: Sensitive<String>,
        }

        let contact = Contact {
            student_id: "S-001".to_string(),
            email: Sensitive::new("ada@example.org".to_string()),
        };

        let debug_str = format!("{:?}", contact);
        assert!(debug_str.contains("S-001"));
        assert!(debug_str.contains("***REDACTED***"));
        assert!(!debug_str.contains("example.org"));
    }
}
