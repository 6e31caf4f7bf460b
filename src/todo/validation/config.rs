//! Configuration for submission validation.

/// Limits applied when validating new task submissions.
///
/// # Examples
///
/// ```
/// use tasklist::todo::validation::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.min_name_chars, 3);
/// assert!(!config.allow_past_dates);
///
/// let lenient = ValidationConfig::lenient();
/// assert!(lenient.allow_past_dates);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Minimum task name length in characters, after trimming.
    pub min_name_chars: usize,
    /// Maximum task name length in characters, after trimming.
    pub max_name_chars: usize,
    /// Whether due dates before today are accepted.
    pub allow_past_dates: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_name_chars: 3,
            max_name_chars: 100,
            allow_past_dates: false,
        }
    }
}

impl ValidationConfig {
    /// Creates a configuration that accepts past due dates.
    ///
    /// Useful when back-filling tasks that are already overdue.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            allow_past_dates: true,
            ..Default::default()
        }
    }
}
