//! Translation of known collaborator error messages.

use serde::{Deserialize, Serialize};

/// One known message and its friendlier replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownErrorMessage {
    /// Text to look for in the collaborator's message (case-insensitive).
    #[serde(rename = "match")]
    pub pattern: String,
    /// The message shown instead.
    pub message: String,
}

/// Maps raw collaborator errors onto user-facing messages.
///
/// Entries are tried in order and the first whose pattern occurs in the raw
/// message wins. Blank patterns never match. Unknown messages pass through
/// unchanged.
///
/// # Example
///
/// ```
/// use payroll_engine::payrun::ErrorMessageMap;
///
/// let map = ErrorMessageMap::default();
/// assert!(map.translate("Employee salary not set").contains("not configured"));
/// assert_eq!(map.translate("disk full"), "disk full");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessageMap {
    /// Known messages, in match priority order.
    pub messages: Vec<KnownErrorMessage>,
}

impl ErrorMessageMap {
    /// Creates a map from explicit entries.
    pub fn new(messages: Vec<KnownErrorMessage>) -> Self {
        Self { messages }
    }

    /// Returns the friendly message for `raw`, or `raw` itself.
    pub fn translate(&self, raw: &str) -> String {
        let needle = raw.to_lowercase();
        self.messages
            .iter()
            .filter(|known| !known.pattern.trim().is_empty())
            .find(|known| needle.contains(&known.pattern.to_lowercase()))
            .map(|known| known.message.clone())
            .unwrap_or_else(|| raw.to_string())
    }
}

impl Default for ErrorMessageMap {
    fn default() -> Self {
        let known = |pattern: &str, message: &str| KnownErrorMessage {
            pattern: pattern.to_string(),
            message: message.to_string(),
        };
        Self::new(vec![
            known(
                "Employee salary not set",
                "Salary is not configured for this employee. Set up their salary before running payroll.",
            ),
            known(
                "already exists",
                "A salary record already exists for this employee and pay period.",
            ),
            known(
                "unauthorized",
                "Your session has expired. Sign in again and retry.",
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_message_is_translated() {
        let map = ErrorMessageMap::default();
        assert_eq!(
            map.translate("Employee salary not set"),
            "Salary is not configured for this employee. Set up their salary before running payroll."
        );
    }

    #[test]
    fn test_match_is_case_insensitive_substring() {
        let map = ErrorMessageMap::default();
        assert_eq!(
            map.translate("401 Unauthorized"),
            "Your session has expired. Sign in again and retry."
        );
    }

    #[test]
    fn test_unknown_message_passes_through() {
        let map = ErrorMessageMap::default();
        assert_eq!(map.translate("connection reset"), "connection reset");
    }

    #[test]
    fn test_first_match_wins() {
        let map = ErrorMessageMap::new(vec![
            KnownErrorMessage {
                pattern: "salary".to_string(),
                message: "first".to_string(),
            },
            KnownErrorMessage {
                pattern: "salary not set".to_string(),
                message: "second".to_string(),
            },
        ]);
        assert_eq!(map.translate("Employee salary not set"), "first");
    }

    #[test]
    fn test_blank_pattern_is_skipped() {
        let yaml = r#"
messages:
  - match: "  "
    message: "Something went wrong."
  - match: "already exists"
    message: "Duplicate record."
"#;
        let map: ErrorMessageMap = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(map.translate("connection reset"), "connection reset");
        assert_eq!(map.translate("Record already exists"), "Duplicate record.");
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let yaml = r#"
messages:
  - match: "Employee salary not set"
    message: "Configure salary first."
"#;
        let map: ErrorMessageMap = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(map.messages.len(), 1);
        assert_eq!(map.translate("Employee salary not set"), "Configure salary first.");
    }
}
